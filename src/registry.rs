use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::codepoint::CodePoint;
use crate::subset::UnicodeSubset;
use crate::{Error, NameTable, Result};

// Dot-separated version components, compared component-wise.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnicodeVersion {
    parts: Vec<u32>,
}

impl UnicodeVersion {
    pub fn parse(text: &str) -> Result<Self> {
        let mut parts = Vec::new();
        for piece in text.split('.') {
            let value: u32 = piece.parse().map_err(|_| {
                Error::Configuration(format!("invalid Unicode version string {text:?}"))
            })?;
            parts.push(value);
        }
        Ok(Self { parts })
    }

    // The version of the Unicode data shipped with the Rust standard library.
    pub fn runtime() -> Self {
        let (major, minor, update) = char::UNICODE_VERSION;
        Self {
            parts: vec![u32::from(major), u32::from(minor), u32::from(update)],
        }
    }
}

impl fmt::Display for UnicodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, part) in self.parts.iter().enumerate() {
            if k > 0 {
                write!(f, ".")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryChange {
    pub exclude: Vec<CodePoint>,
    pub insert: Vec<CodePoint>,
}

#[derive(Debug, Clone)]
pub struct CategoryDiff {
    pub version: String,
    pub changes: Vec<(String, CategoryChange)>,
}

#[derive(Debug, Clone)]
pub struct BlockDiff {
    pub version: String,
    pub blocks: Vec<(String, (u32, u32))>,
}

pub trait CategoryProvider {
    fn min_version(&self) -> &str;
    fn raw_categories(&self) -> Vec<(String, Vec<CodePoint>)>;
    fn diffs(&self) -> Vec<CategoryDiff>;
}

pub trait BlockProvider {
    fn min_version(&self) -> &str;
    fn raw_blocks(&self) -> Vec<(String, (u32, u32))>;
    fn diffs(&self) -> Vec<BlockDiff>;
}

// Blocks stay raw until first lookup, then the materialized subset is cached.
#[derive(Debug)]
struct BlockEntry {
    range: (u32, u32),
    subset: OnceLock<UnicodeSubset>,
}

// XML NameStartChar / NameChar, the replacement subsets for `\i` and `\c`.
const INITIAL_NAME_CHARS: &str = ":A-Z_a-z\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{2FF}\
     \u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\
     \u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}";
const NAME_CHARS: &str = "\\-.0-9:A-Z_a-z\u{B7}\u{C0}-\u{D6}\u{D8}-\u{F6}\
     \u{F8}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{203F}\u{2040}\
     \u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\
     \u{FDF0}-\u{FFFD}";

// Install-once tables of Unicode categories and blocks. Lookups hand out
// shared immutable views, so a fully installed registry can be read from
// multiple threads.
#[derive(Debug)]
pub struct SubsetRegistry {
    categories: HashMap<String, UnicodeSubset>,
    blocks: HashMap<String, BlockEntry>,
    no_block: OnceLock<UnicodeSubset>,
    space_shortcut: UnicodeSubset,
    digit_shortcut: UnicodeSubset,
    initial_name_shortcut: UnicodeSubset,
    name_shortcut: UnicodeSubset,
    word_shortcut: UnicodeSubset,
}

impl SubsetRegistry {
    pub fn new() -> Result<Self> {
        Ok(Self {
            categories: HashMap::new(),
            blocks: HashMap::new(),
            no_block: OnceLock::new(),
            space_shortcut: UnicodeSubset::from_class(" \n\t\r")?,
            digit_shortcut: UnicodeSubset::new(),
            initial_name_shortcut: UnicodeSubset::from_class(INITIAL_NAME_CHARS)?,
            name_shortcut: UnicodeSubset::from_class(NAME_CHARS)?,
            word_shortcut: UnicodeSubset::new(),
        })
    }

    pub fn install(
        categories: &dyn CategoryProvider,
        blocks: &dyn BlockProvider,
    ) -> Result<Self> {
        let mut registry = Self::new()?;
        registry.install_categories(categories)?;
        registry.install_blocks(blocks)?;
        Ok(registry)
    }

    pub fn install_categories(&mut self, provider: &dyn CategoryProvider) -> Result<()> {
        let runtime = check_min_version(provider.min_version(), "categories")?;

        let mut raw: HashMap<String, Vec<(u32, u32)>> = HashMap::new();
        for (name, entries) in provider.raw_categories() {
            let mut ranges = Vec::with_capacity(entries.len());
            for entry in entries {
                ranges.push(entry.bounds()?);
            }
            raw.insert(name, ranges);
        }

        for diff in applicable_diffs(provider.diffs(), &runtime, |diff| diff.version.as_str())? {
            for (name, change) in &diff.changes {
                let existing = raw.entry(name.clone()).or_default();
                *existing = merge_patch(existing, change)?;
            }
        }

        let mut categories = HashMap::with_capacity(raw.len());
        for (name, ranges) in raw {
            categories.insert(name, UnicodeSubset::from_sorted_ranges(ranges));
        }

        // Derive shortcuts before swapping so a failure leaves the previously
        // installed table untouched.
        let digit = categories.get("Nd").cloned().ok_or_else(|| Error::NotFound {
            name: "Nd".to_string(),
            table: NameTable::Categories,
        })?;
        let mut word = UnicodeSubset::new();
        for name in ["L", "M", "N", "S"] {
            let part = categories.get(name).ok_or_else(|| Error::NotFound {
                name: name.to_string(),
                table: NameTable::Categories,
            })?;
            word.union_update(part);
        }

        self.categories = categories;
        self.digit_shortcut = digit;
        self.word_shortcut = word;
        Ok(())
    }

    pub fn install_blocks(&mut self, provider: &dyn BlockProvider) -> Result<()> {
        let runtime = check_min_version(provider.min_version(), "blocks")?;

        let mut raw: HashMap<String, (u32, u32)> = provider.raw_blocks().into_iter().collect();
        for diff in applicable_diffs(provider.diffs(), &runtime, |diff| diff.version.as_str())? {
            for (name, range) in diff.blocks {
                raw.insert(name, range);
            }
        }

        let mut blocks = HashMap::with_capacity(raw.len());
        for (name, range) in raw {
            CodePoint::Range(range.0, range.1).bounds()?;
            blocks.insert(
                block_key(&name),
                BlockEntry {
                    range,
                    subset: OnceLock::new(),
                },
            );
        }

        self.blocks = blocks;
        self.no_block = OnceLock::new();
        Ok(())
    }

    pub fn category(&self, name: &str) -> Result<&UnicodeSubset> {
        self.categories.get(name).ok_or_else(|| Error::NotFound {
            name: name.to_string(),
            table: NameTable::Categories,
        })
    }

    // Lookup disregards casing, spaces, hyphens and underscores. The special
    // block `NoBlock` covers every code point outside all installed blocks.
    pub fn block(&self, name: &str) -> Result<&UnicodeSubset> {
        let key = block_key(name);
        match self.blocks.get(&key) {
            Some(entry) => Ok(entry
                .subset
                .get_or_init(|| UnicodeSubset::from_sorted_ranges(vec![entry.range]))),
            None if key == "NOBLOCK" => Ok(self.no_block.get_or_init(|| {
                let mut subset = UnicodeSubset::full();
                let mut ranges: Vec<(u32, u32)> =
                    self.blocks.values().map(|entry| entry.range).collect();
                ranges.sort_by(|a, b| b.0.cmp(&a.0));
                for (lo, hi) in ranges {
                    subset.remove_range(lo, hi);
                }
                subset
            })),
            None => Err(Error::NotFound {
                name: name.to_string(),
                table: NameTable::Blocks,
            }),
        }
    }

    // An `Is` prefix designates a Unicode block reference, anything else is
    // resolved as a category.
    pub fn resolve(&self, name: &str) -> Result<&UnicodeSubset> {
        match name.strip_prefix("Is") {
            Some(block_name) => self.block(block_name).map_err(|_| Error::NotFound {
                name: name.to_string(),
                table: NameTable::Blocks,
            }),
            None => self.category(name),
        }
    }

    pub fn shortcut(&self, letter: char) -> Option<&UnicodeSubset> {
        match letter {
            's' => Some(&self.space_shortcut),
            'd' => Some(&self.digit_shortcut),
            'i' => Some(&self.initial_name_shortcut),
            'c' => Some(&self.name_shortcut),
            'w' => Some(&self.word_shortcut),
            _ => None,
        }
    }
}

fn check_min_version(min_version: &str, what: &str) -> Result<UnicodeVersion> {
    let runtime = UnicodeVersion::runtime();
    let minimum = UnicodeVersion::parse(min_version)?;
    if runtime < minimum {
        return Err(Error::Configuration(format!(
            "can't install Unicode {what}: the provider requires Unicode {minimum} \
             but the runtime data is {runtime}"
        )));
    }
    Ok(runtime)
}

fn applicable_diffs<D>(
    diffs: Vec<D>,
    runtime: &UnicodeVersion,
    version: impl Fn(&D) -> &str,
) -> Result<Vec<D>> {
    let mut parsed = Vec::with_capacity(diffs.len());
    for diff in diffs {
        let diff_version = UnicodeVersion::parse(version(&diff))?;
        if diff_version <= *runtime {
            parsed.push((diff_version, diff));
        }
    }
    parsed.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(parsed.into_iter().map(|(_, diff)| diff).collect())
}

// Merge-walks the existing sorted entries against the diff's insertions,
// skipping entries named by the exclusion set. Both sides stay sorted by
// start, so the output does too.
fn merge_patch(existing: &[(u32, u32)], change: &CategoryChange) -> Result<Vec<(u32, u32)>> {
    let mut exclude = Vec::with_capacity(change.exclude.len());
    for entry in &change.exclude {
        exclude.push(entry.bounds()?);
    }
    let mut insert = Vec::with_capacity(change.insert.len());
    for entry in &change.insert {
        insert.push(entry.bounds()?);
    }
    insert.sort_by_key(|&(lo, _)| lo);

    let mut out = Vec::with_capacity(existing.len() + insert.len());
    let mut pending = insert.into_iter().peekable();
    for &entry in existing {
        if exclude.contains(&entry) {
            continue;
        }
        while let Some(&ins) = pending.peek() {
            if ins.0 <= entry.0 {
                out.push(ins);
                pending.next();
            } else {
                break;
            }
        }
        out.push(entry);
    }
    out.extend(pending);
    Ok(out)
}

fn block_key(name: &str) -> String {
    name.chars()
        .filter(|ch| !matches!(ch, ' ' | '-' | '_'))
        .flat_map(char::to_uppercase)
        .collect()
}
