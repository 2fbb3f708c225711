//! System font inventory.
//!
//! The catalog enumerates installed faces once through `fontdb`, groups them
//! into per-family descriptors, classifies each family by script, and ranks
//! families within their script. The snapshot is built lazily behind a
//! read-write lock and shared immutably afterwards; [`FontCatalog::reload`]
//! rebuilds it when the installed font set changes.

use std::{
    collections::BTreeMap,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use crate::{
    fonts::{
        classify::{Script, classify_family},
        rank::rank_families,
    },
    style::model::FontWeight,
};

/// Weight bucket a face file is filed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightClass {
    /// Around 400.
    Regular,
    /// 600 and up.
    Bold,
    /// 300 and below.
    Light,
}

impl From<FontWeight> for WeightClass {
    fn from(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Normal => WeightClass::Regular,
            FontWeight::Bold => WeightClass::Bold,
        }
    }
}

impl WeightClass {
    fn from_numeric(weight: u16) -> Self {
        if weight >= 600 {
            WeightClass::Bold
        } else if weight <= 300 {
            WeightClass::Light
        } else {
            WeightClass::Regular
        }
    }

    pub(crate) fn to_fontdb(self) -> fontdb::Weight {
        match self {
            WeightClass::Regular => fontdb::Weight::NORMAL,
            WeightClass::Bold => fontdb::Weight::BOLD,
            WeightClass::Light => fontdb::Weight::LIGHT,
        }
    }
}

/// Per-weight file paths for one family.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontPaths {
    /// Regular-weight face file, if discovered.
    pub regular: Option<PathBuf>,
    /// Bold face file, if discovered.
    pub bold: Option<PathBuf>,
    /// Light face file, if discovered.
    pub light: Option<PathBuf>,
}

impl FontPaths {
    /// Path for a weight bucket, if discovered.
    pub fn for_weight(&self, weight: WeightClass) -> Option<&PathBuf> {
        match weight {
            WeightClass::Regular => self.regular.as_ref(),
            WeightClass::Bold => self.bold.as_ref(),
            WeightClass::Light => self.light.as_ref(),
        }
    }

    fn slot_mut(&mut self, weight: WeightClass) -> &mut Option<PathBuf> {
        match weight {
            WeightClass::Regular => &mut self.regular,
            WeightClass::Bold => &mut self.bold,
            WeightClass::Light => &mut self.light,
        }
    }
}

/// One discovered font family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontDescriptor {
    /// Canonical family name as reported by the face.
    pub family: String,
    /// Script the family is classified under.
    pub script: Script,
    /// Rank within the script, 0 = best.
    pub priority_rank: u32,
    /// Discovered face files by weight.
    pub paths: FontPaths,
    /// `true` when at least one discovered path exists on disk.
    pub validated: bool,
}

/// Immutable inventory built from one enumeration pass.
pub(crate) struct CatalogSnapshot {
    pub(crate) db: fontdb::Database,
    descriptors: Vec<FontDescriptor>,
}

impl std::fmt::Debug for CatalogSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogSnapshot")
            .field("faces", &self.db.len())
            .field("families", &self.descriptors.len())
            .finish()
    }
}

/// Families assumed present on any reasonable Linux install; used when system
/// enumeration comes back empty (containers, stripped images).
const BUILTIN_FAMILIES: &[&str] = &[
    "DejaVu Sans",
    "DejaVu Serif",
    "DejaVu Sans Mono",
    "Liberation Sans",
    "Liberation Serif",
    "Liberation Mono",
    "WenQuanYi Zen Hei",
    "WenQuanYi Micro Hei",
    "Noto Sans",
    "Noto Serif",
    "Lato",
];

/// Lazily built, reloadable font inventory.
#[derive(Debug, Default)]
pub struct FontCatalog {
    snapshot: RwLock<Option<Arc<CatalogSnapshot>>>,
}

impl FontCatalog {
    /// Create an empty catalog; the system scan runs on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from explicit family names, skipping the system scan.
    pub fn from_families(families: &[&str]) -> Self {
        let names: Vec<String> = families.iter().map(|f| f.to_string()).collect();
        let snapshot = CatalogSnapshot {
            db: fontdb::Database::new(),
            descriptors: build_descriptors(names.into_iter().map(|n| (n, FontPaths::default()))),
        };
        Self {
            snapshot: RwLock::new(Some(Arc::new(snapshot))),
        }
    }

    pub(crate) fn snapshot(&self) -> Arc<CatalogSnapshot> {
        if let Some(snap) = self
            .snapshot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
        {
            return Arc::clone(snap);
        }

        let mut guard = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        // Another thread may have won the race between the read and write locks.
        if let Some(snap) = guard.as_ref() {
            return Arc::clone(snap);
        }
        let snap = Arc::new(scan_system());
        *guard = Some(Arc::clone(&snap));
        snap
    }

    /// Drop the current snapshot and rescan on next use.
    pub fn reload(&self) {
        let mut guard = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    /// All discovered families, ranked best-first within each script and
    /// grouped Latin-first.
    pub fn descriptors(&self) -> Vec<FontDescriptor> {
        self.snapshot().descriptors.clone()
    }

    /// Families grouped by script, each group ranked best-first.
    pub fn fonts_by_script(&self) -> BTreeMap<Script, Vec<FontDescriptor>> {
        let snap = self.snapshot();
        let mut grouped: BTreeMap<Script, Vec<FontDescriptor>> = BTreeMap::new();
        for desc in &snap.descriptors {
            grouped.entry(desc.script).or_default().push(desc.clone());
        }
        grouped
    }

    /// Family names decorated with their script code, e.g. `[CN] WenQuanYi Zen Hei`.
    pub fn labeled_families(&self) -> Vec<String> {
        self.snapshot()
            .descriptors
            .iter()
            .map(|d| label_with_script(&d.family, d.script))
            .collect()
    }

    /// Descriptor for an exact family name, if present.
    pub fn find(&self, family: &str) -> Option<FontDescriptor> {
        self.snapshot()
            .descriptors
            .iter()
            .find(|d| d.family.eq_ignore_ascii_case(family))
            .cloned()
    }
}

/// Decorate a family name with its script code for display.
pub fn label_with_script(family: &str, script: Script) -> String {
    format!("[{}] {}", script.code(), family)
}

/// Remove a leading `[XX] ` script label, if present. Undecorated names pass
/// through unchanged, so `strip_label(label_with_script(f, s)) == f` always
/// holds.
pub fn strip_label(family: &str) -> &str {
    if family.starts_with('[')
        && let Some((_, rest)) = family.split_once("] ")
    {
        rest
    } else {
        family
    }
}

fn scan_system() -> CatalogSnapshot {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let mut by_family: BTreeMap<String, FontPaths> = BTreeMap::new();
    for face in db.faces() {
        let Some((family, _)) = face.families.first() else {
            continue;
        };
        let path = match &face.source {
            fontdb::Source::File(p) => p.clone(),
            fontdb::Source::SharedFile(p, _) => p.clone(),
            fontdb::Source::Binary(_) => continue,
        };
        let weight = WeightClass::from_numeric(face.weight.0);
        let slot = by_family
            .entry(family.clone())
            .or_default()
            .slot_mut(weight);
        if slot.is_none() {
            *slot = Some(path);
        }
    }

    if by_family.is_empty() {
        tracing::warn!("system font scan found no faces, seeding builtin family list");
        for family in BUILTIN_FAMILIES {
            by_family.insert(family.to_string(), FontPaths::default());
        }
    }

    let descriptors = build_descriptors(by_family.into_iter());
    tracing::debug!(families = descriptors.len(), "font catalog built");
    CatalogSnapshot { db, descriptors }
}

fn build_descriptors(families: impl Iterator<Item = (String, FontPaths)>) -> Vec<FontDescriptor> {
    let mut by_script: BTreeMap<Script, Vec<(String, FontPaths)>> = BTreeMap::new();
    for (family, paths) in families {
        let script = classify_family(&family);
        by_script.entry(script).or_default().push((family, paths));
    }

    let mut out = Vec::new();
    for script in Script::ALL {
        let Some(entries) = by_script.remove(&script) else {
            continue;
        };
        let mut names: Vec<String> = entries.iter().map(|(f, _)| f.clone()).collect();
        let mut paths: BTreeMap<String, FontPaths> = entries.into_iter().collect();
        rank_families(script, &mut names);
        for (rank, family) in names.into_iter().enumerate() {
            let paths = paths.remove(&family).unwrap_or_default();
            let validated = [&paths.regular, &paths.bold, &paths.light]
                .into_iter()
                .flatten()
                .any(|p| p.exists());
            out.push(FontDescriptor {
                family,
                script,
                priority_rank: rank as u32,
                paths,
                validated,
            });
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/catalog.rs"]
mod tests;
