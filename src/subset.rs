use std::fmt;

use crate::codepoint::CodePoint;
use crate::parser::parse_character_class;
use crate::{Error, MAX_CODE_POINT, Result};

// Ordered list of half-open (start, end) ranges over the Unicode code space.
// The mutation API keeps the list sorted, non-overlapping and non-touching;
// `from_raw` only sorts, so raw-built sets must not be assumed merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnicodeSubset {
    ranges: Vec<(u32, u32)>,
}

impl UnicodeSubset {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn full() -> Self {
        Self {
            ranges: vec![(0, MAX_CODE_POINT + 1)],
        }
    }

    pub(crate) fn from_sorted_ranges(mut ranges: Vec<(u32, u32)>) -> Self {
        ranges.sort_by_key(|&(lo, _)| lo);
        Self { ranges }
    }

    pub fn from_raw<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<CodePoint>,
    {
        let mut ranges = Vec::new();
        for entry in entries {
            ranges.push(entry.into().bounds()?);
        }
        Ok(Self::from_sorted_ranges(ranges))
    }

    pub fn from_class(body: &str) -> Result<Self> {
        let mut subset = Self::new();
        subset.update(body)?;
        Ok(subset)
    }

    pub fn update(&mut self, body: &str) -> Result<()> {
        for (lo, hi) in parsed_descending(body)? {
            self.insert_range(lo, hi);
        }
        Ok(())
    }

    pub fn remove_class(&mut self, body: &str) -> Result<()> {
        for (lo, hi) in parsed_descending(body)? {
            self.remove_range(lo, hi);
        }
        Ok(())
    }

    pub fn ranges(&self) -> &[(u32, u32)] {
        &self.ranges
    }

    pub fn entries(&self) -> impl Iterator<Item = CodePoint> + '_ {
        self.ranges.iter().map(|&(lo, hi)| {
            if hi == lo + 1 {
                CodePoint::Single(lo)
            } else {
                CodePoint::Range(lo, hi)
            }
        })
    }

    pub fn contains(&self, cp: u32) -> bool {
        for &(lo, hi) in &self.ranges {
            if lo > cp {
                return false;
            }
            if cp < hi {
                return true;
            }
        }
        false
    }

    pub fn contains_char(&self, ch: char) -> bool {
        self.contains(ch as u32)
    }

    pub fn add(&mut self, value: impl Into<CodePoint>) -> Result<()> {
        let (lo, hi) = value.into().bounds()?;
        self.insert_range(lo, hi);
        Ok(())
    }

    pub fn discard(&mut self, value: impl Into<CodePoint>) -> Result<()> {
        let (lo, hi) = value.into().bounds()?;
        self.remove_range(lo, hi);
        Ok(())
    }

    // Merges on overlap or touch, widening forward through every later entry
    // the widened range reaches.
    pub(crate) fn insert_range(&mut self, lo: u32, hi: u32) {
        let ranges = &mut self.ranges;
        let mut k = 0;
        while k < ranges.len() && ranges[k].1 < lo {
            k += 1;
        }
        if k == ranges.len() {
            ranges.push((lo, hi));
            return;
        }
        if hi < ranges[k].0 {
            ranges.insert(k, (lo, hi));
            return;
        }
        let start = lo.min(ranges[k].0);
        let mut end = hi.max(ranges[k].1);
        let mut j = k + 1;
        while j < ranges.len() && ranges[j].0 <= end {
            end = end.max(ranges[j].1);
            j += 1;
        }
        ranges[k] = (start, end);
        ranges.drain(k + 1..j);
    }

    // Full-cover delete, front clip, back clip, or split into two remainders.
    pub(crate) fn remove_range(&mut self, lo: u32, hi: u32) {
        let mut k = 0;
        while k < self.ranges.len() {
            let (start, end) = self.ranges[k];
            if start >= hi {
                break;
            }
            if end <= lo {
                k += 1;
                continue;
            }
            match (lo <= start, hi >= end) {
                (true, true) => {
                    self.ranges.remove(k);
                }
                (true, false) => {
                    self.ranges[k] = (hi, end);
                    k += 1;
                }
                (false, true) => {
                    self.ranges[k] = (start, lo);
                    k += 1;
                }
                (false, false) => {
                    self.ranges[k] = (start, lo);
                    self.ranges.insert(k + 1, (hi, end));
                    break;
                }
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ranges.iter().flat_map(|&(lo, hi)| lo..hi)
    }

    pub fn iter_reverse(&self) -> impl Iterator<Item = u32> + '_ {
        self.ranges.iter().rev().flat_map(|&(lo, hi)| (lo..hi).rev())
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().filter_map(char::from_u32)
    }

    pub fn len(&self) -> usize {
        self.ranges.iter().map(|&(lo, hi)| (hi - lo) as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    pub fn complement(&self) -> Result<UnicodeSubset> {
        let mut out = Vec::new();
        let mut last = 0u32;
        for &(lo, hi) in &self.ranges {
            if lo < last {
                return Err(Error::InvariantViolation(format!(
                    "unordered code points found in {self}"
                )));
            }
            if lo > last {
                out.push((last, lo));
            }
            last = hi;
        }
        if last <= MAX_CODE_POINT {
            out.push((last, MAX_CODE_POINT + 1));
        }
        Ok(Self { ranges: out })
    }

    pub fn union(&self, other: &UnicodeSubset) -> UnicodeSubset {
        let mut out = self.clone();
        out.union_update(other);
        out
    }

    // In-place variants walk the operand's entries in descending order so
    // earlier insertion points stay valid while later entries land.
    pub fn union_update(&mut self, other: &UnicodeSubset) {
        for &(lo, hi) in other.ranges.iter().rev() {
            self.insert_range(lo, hi);
        }
    }

    pub fn difference(&self, other: &UnicodeSubset) -> UnicodeSubset {
        let mut out = self.clone();
        out.difference_update(other);
        out
    }

    pub fn difference_update(&mut self, other: &UnicodeSubset) {
        for &(lo, hi) in other.ranges.iter().rev() {
            self.remove_range(lo, hi);
        }
    }

    pub fn intersection(&self, other: &UnicodeSubset) -> UnicodeSubset {
        let mut out = self.clone();
        out.intersection_update(other);
        out
    }

    pub fn intersection_update(&mut self, other: &UnicodeSubset) {
        let spill = self.difference(other);
        self.difference_update(&spill);
    }

    pub fn symmetric_difference(&self, other: &UnicodeSubset) -> UnicodeSubset {
        if std::ptr::eq(self, other) {
            return UnicodeSubset::new();
        }
        let mut out = self.clone();
        out.symmetric_difference_update(other);
        out
    }

    pub fn symmetric_difference_update(&mut self, other: &UnicodeSubset) {
        let added = other.difference(self);
        let removed = self.intersection(other);
        self.difference_update(&removed);
        self.union_update(&added);
    }
}

impl fmt::Display for UnicodeSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries() {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

fn parsed_descending(body: &str) -> Result<Vec<(u32, u32)>> {
    let mut ranges = Vec::new();
    for item in parse_character_class(body, false) {
        ranges.push(item?.bounds()?);
    }
    ranges.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(ranges)
}
