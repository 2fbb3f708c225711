pub mod filtergraph;
