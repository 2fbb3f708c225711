//! Family-name to file-path resolution.
//!
//! Resolution walks three tiers: an optional user config file, the system
//! catalog, and a table of well-known distribution paths. When every tier
//! misses, a generic fallback chain is tried and the final entry is returned
//! unconditionally, so resolution never fails; a missing font surfaces as a
//! warning and a possibly-dangling path, not an error. Tier outcomes (hit or
//! known miss) are memoized per `(family, weight)`; the last-resort answer is
//! never attributed to a family.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    fonts::catalog::{FontCatalog, WeightClass, strip_label},
    foundation::{
        cache::KeyedOnce,
        error::{SubburnError, SubburnResult},
    },
};

/// One family's entry in the font config file.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct FontConfigEntry {
    /// Regular-weight face file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular: Option<PathBuf>,
    /// Bold face file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<PathBuf>,
    /// Light face file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<PathBuf>,
    /// Families to try when this entry has no usable file.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<String>,
}

impl FontConfigEntry {
    fn path_for(&self, weight: WeightClass) -> Option<&PathBuf> {
        let exact = match weight {
            WeightClass::Regular => self.regular.as_ref(),
            WeightClass::Bold => self.bold.as_ref(),
            WeightClass::Light => self.light.as_ref(),
        };
        exact.or(self.regular.as_ref())
    }
}

/// User-supplied font overrides, loaded from JSON.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct FontConfig {
    /// Extra directories to resolve relative face paths against.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_paths: Vec<PathBuf>,
    /// Per-family overrides, keyed by family name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fonts: BTreeMap<String, FontConfigEntry>,
}

impl FontConfig {
    /// Parse a config file.
    pub fn load(path: &Path) -> SubburnResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| SubburnError::font(format!("read {}: {err}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|err| SubburnError::font(format!("parse {}: {err}", path.display())))
    }

    fn entry(&self, family: &str) -> Option<&FontConfigEntry> {
        self.fonts
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(family))
            .map(|(_, entry)| entry)
    }
}

/// Locations probed for a config file when none is given explicitly.
const DEFAULT_CONFIG_PATHS: &[&str] = &["fonts/font_config.json", "font_config.json"];

struct KnownFamily {
    family: &'static str,
    regular: &'static str,
    bold: Option<&'static str>,
    light: Option<&'static str>,
}

/// Well-known install locations on Debian-family systems, probed when neither
/// the config nor the system catalog knows the family.
const KNOWN_FAMILIES: &[KnownFamily] = &[
    KnownFamily {
        family: "WenQuanYi Zen Hei",
        regular: "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
        bold: None,
        light: None,
    },
    KnownFamily {
        family: "WenQuanYi Micro Hei",
        regular: "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
        bold: None,
        light: None,
    },
    KnownFamily {
        family: "Noto Sans CJK SC",
        regular: "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        bold: Some("/usr/share/fonts/opentype/noto/NotoSansCJK-Bold.ttc"),
        light: None,
    },
    KnownFamily {
        family: "DejaVu Sans",
        regular: "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        bold: Some("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
        light: None,
    },
    KnownFamily {
        family: "DejaVu Serif",
        regular: "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
        bold: Some("/usr/share/fonts/truetype/dejavu/DejaVuSerif-Bold.ttf"),
        light: None,
    },
    KnownFamily {
        family: "DejaVu Sans Mono",
        regular: "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
        bold: Some("/usr/share/fonts/truetype/dejavu/DejaVuSansMono-Bold.ttf"),
        light: None,
    },
    KnownFamily {
        family: "Liberation Sans",
        regular: "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        bold: Some("/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf"),
        light: None,
    },
    KnownFamily {
        family: "Liberation Serif",
        regular: "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
        bold: Some("/usr/share/fonts/truetype/liberation/LiberationSerif-Bold.ttf"),
        light: None,
    },
    KnownFamily {
        family: "Liberation Mono",
        regular: "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
        bold: Some("/usr/share/fonts/truetype/liberation/LiberationMono-Bold.ttf"),
        light: None,
    },
    KnownFamily {
        family: "Ubuntu",
        regular: "/usr/share/fonts/truetype/ubuntu/Ubuntu-R.ttf",
        bold: Some("/usr/share/fonts/truetype/ubuntu/Ubuntu-B.ttf"),
        light: Some("/usr/share/fonts/truetype/ubuntu/Ubuntu-L.ttf"),
    },
    KnownFamily {
        family: "Lato",
        regular: "/usr/share/fonts/truetype/lato/Lato-Regular.ttf",
        bold: Some("/usr/share/fonts/truetype/lato/Lato-Bold.ttf"),
        light: Some("/usr/share/fonts/truetype/lato/Lato-Light.ttf"),
    },
];

/// Last-resort chain, broadest coverage first. The final entry is returned
/// even when it does not exist on disk.
const FALLBACK_CHAIN: &[&str] = &[
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

/// Infallible family-to-path resolver over a shared [`FontCatalog`].
#[derive(Debug)]
pub struct FontResolver {
    catalog: Arc<FontCatalog>,
    config: Option<LoadedConfig>,
    // Caches tier outcomes, not final answers: `None` marks a family no tier
    // knows, so a candidate list can move past it instead of being stopped by
    // a memoized last-resort path.
    path_cache: KeyedOnce<(String, WeightClass), Option<PathBuf>>,
}

#[derive(Debug)]
struct LoadedConfig {
    config: FontConfig,
    base_dir: PathBuf,
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FontResolver {
    /// Resolver over a fresh system catalog, picking up a config file from the
    /// default locations when one exists.
    pub fn new() -> Self {
        let mut resolver = Self::with_catalog(Arc::new(FontCatalog::new()));
        for candidate in DEFAULT_CONFIG_PATHS {
            let path = Path::new(candidate);
            if !path.is_file() {
                continue;
            }
            match FontConfig::load(path) {
                Ok(config) => {
                    resolver.config = Some(LoadedConfig {
                        config,
                        base_dir: path.parent().unwrap_or(Path::new(".")).to_path_buf(),
                    });
                    break;
                }
                Err(err) => tracing::warn!(path = candidate, %err, "ignoring broken font config"),
            }
        }
        resolver
    }

    /// Resolver over an existing catalog, with no config file.
    pub fn with_catalog(catalog: Arc<FontCatalog>) -> Self {
        Self {
            catalog,
            config: None,
            path_cache: KeyedOnce::new(),
        }
    }

    /// Resolver over a fresh system catalog and an explicit config file.
    pub fn with_config_file(path: &Path) -> SubburnResult<Self> {
        let config = FontConfig::load(path)?;
        let mut resolver = Self::with_catalog(Arc::new(FontCatalog::new()));
        resolver.config = Some(LoadedConfig {
            config,
            base_dir: path.parent().unwrap_or(Path::new(".")).to_path_buf(),
        });
        Ok(resolver)
    }

    /// The catalog backing this resolver.
    pub fn catalog(&self) -> &FontCatalog {
        &self.catalog
    }

    /// Resolve a single family to a face file.
    ///
    /// Never fails: when no tier knows the family, the generic fallback chain
    /// is consulted and its last entry returned even if absent on disk.
    pub fn resolve_path(&self, family: &str, weight: WeightClass) -> PathBuf {
        let family = strip_label(family).trim();
        self.path_cache
            .get_or_init((family.to_ascii_lowercase(), weight), || {
                self.try_resolve(family, weight)
            })
            .unwrap_or_else(|| self.last_resort(family))
    }

    /// Resolve a comma-separated candidate list, first hit wins.
    pub fn resolve_family_list(&self, families: &str, weight: WeightClass) -> PathBuf {
        for candidate in families.split(',') {
            let candidate = strip_label(candidate).trim();
            if candidate.is_empty() {
                continue;
            }
            let hit = self
                .path_cache
                .get_or_init((candidate.to_ascii_lowercase(), weight), || {
                    self.try_resolve(candidate, weight)
                });
            if let Some(path) = hit {
                return path;
            }
        }
        self.last_resort(families)
    }

    fn try_resolve(&self, family: &str, weight: WeightClass) -> Option<PathBuf> {
        if let Some(path) = self.resolve_from_config(family, weight, &mut Vec::new()) {
            tracing::debug!(family, ?weight, path = %path.display(), "resolved via config");
            return Some(path);
        }
        if let Some(path) = self.resolve_from_catalog(family, weight) {
            tracing::debug!(family, ?weight, path = %path.display(), "resolved via catalog");
            return Some(path);
        }
        if let Some(path) = resolve_known(family, weight) {
            tracing::debug!(family, ?weight, path = %path.display(), "resolved via known paths");
            return Some(path);
        }
        None
    }

    fn resolve_from_config(
        &self,
        family: &str,
        weight: WeightClass,
        visited: &mut Vec<String>,
    ) -> Option<PathBuf> {
        let loaded = self.config.as_ref()?;
        let key = family.to_ascii_lowercase();
        if visited.contains(&key) {
            return None;
        }
        visited.push(key);

        let entry = loaded.config.entry(family)?;
        if let Some(raw) = entry.path_for(weight)
            && let Some(path) = loaded.locate(raw)
        {
            return Some(path);
        }
        for fallback in &entry.fallbacks {
            if let Some(path) = self.resolve_from_config(fallback, weight, visited) {
                return Some(path);
            }
        }
        None
    }

    fn resolve_from_catalog(&self, family: &str, weight: WeightClass) -> Option<PathBuf> {
        let snap = self.catalog.snapshot();

        if let Some(desc) = self.catalog.find(family) {
            let path = desc
                .paths
                .for_weight(weight)
                .or(desc.paths.regular.as_ref())
                .cloned();
            if let Some(path) = path.filter(|p| p.exists()) {
                return Some(path);
            }
        }

        let query = fontdb::Query {
            families: &[fontdb::Family::Name(family)],
            weight: weight.to_fontdb(),
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        let id = snap.db.query(&query)?;
        match &snap.db.face(id)?.source {
            fontdb::Source::File(p) | fontdb::Source::SharedFile(p, _) => Some(p.clone()),
            fontdb::Source::Binary(_) => None,
        }
    }

    fn last_resort(&self, requested: &str) -> PathBuf {
        for candidate in FALLBACK_CHAIN {
            let path = Path::new(candidate);
            if path.exists() {
                tracing::warn!(requested, fallback = candidate, "font not found, using fallback");
                return path.to_path_buf();
            }
        }
        let last = FALLBACK_CHAIN[FALLBACK_CHAIN.len() - 1];
        tracing::warn!(requested, fallback = last, "no fallback font present on disk");
        PathBuf::from(last)
    }
}

impl LoadedConfig {
    fn locate(&self, raw: &Path) -> Option<PathBuf> {
        if raw.is_absolute() {
            return raw.exists().then(|| raw.to_path_buf());
        }
        let direct = self.base_dir.join(raw);
        if direct.exists() {
            return Some(direct);
        }
        for dir in &self.config.search_paths {
            let root = if dir.is_absolute() {
                dir.clone()
            } else {
                self.base_dir.join(dir)
            };
            let candidate = root.join(raw);
            if candidate.exists() {
                return Some(candidate);
            }
        }
        None
    }
}

fn resolve_known(family: &str, weight: WeightClass) -> Option<PathBuf> {
    let known = KNOWN_FAMILIES
        .iter()
        .find(|k| k.family.eq_ignore_ascii_case(family))?;
    let exact = match weight {
        WeightClass::Regular => Some(known.regular),
        WeightClass::Bold => known.bold,
        WeightClass::Light => known.light,
    };
    for candidate in [exact, Some(known.regular)].into_iter().flatten() {
        let path = Path::new(candidate);
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/resolve.rs"]
mod tests;
