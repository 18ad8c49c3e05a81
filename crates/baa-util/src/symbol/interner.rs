//! Global string table backing [`Symbol`](super::Symbol).
//!
//! Storage is a pair of `DashMap`s (text → index and index → text) so both
//! interning and resolution are O(1) without a global lock. Interned text
//! is leaked to obtain the `'static` lifetime; the table lives for the
//! whole process and entries are never removed, so the total leak is
//! bounded by the unique names in the compiled sources.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::LazyLock;

use ahash::RandomState;
use dashmap::DashMap;

use super::Symbol;

/// Global table, initialized on first use with the language's keywords and
/// type names pre-interned so they occupy stable low indices.
pub(super) static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(|| {
    let table = StringTable::new();
    for text in KNOWN_STRINGS {
        table.intern(text);
    }
    table
});

/// Keywords and primitive type names, pre-interned at startup.
const KNOWN_STRINGS: &[&str] = &[
    // Declaration and control-flow keywords
    "دالة", "إرجع", "إذا", "وإلا", "طالما", "لكل", "افعل", "اختر", "حالة", "افتراضي", "توقف",
    "استمر", "متغير",
    // Modifiers
    "ثابت", "ساكن", "خارجي", "مضمن", "مقيد", "تلقائي", "سجل",
    // Value keywords
    "صحيح", "خطأ", "فارغ",
    // Primitive type names
    "عدد_صحيح", "عدد_حقيقي", "حرف", "فراغ", "منطقي", "نص",
    // Directives
    "تضمين",
];

pub(super) struct StringTable {
    /// Text to symbol index.
    names: DashMap<&'static str, u32, RandomState>,
    /// Symbol index to text.
    strings: DashMap<u32, &'static str, RandomState>,
    next_index: AtomicU32,
}

impl StringTable {
    fn new() -> Self {
        Self {
            names: DashMap::with_capacity_and_hasher(256, RandomState::new()),
            strings: DashMap::with_capacity_and_hasher(256, RandomState::new()),
            next_index: AtomicU32::new(0),
        }
    }

    pub(super) fn intern(&self, text: &str) -> Symbol {
        if let Some(existing) = self.names.get(text) {
            return Symbol(*existing);
        }

        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
        let index = *self
            .names
            .entry(leaked)
            .or_insert_with(|| self.next_index.fetch_add(1, Ordering::Relaxed));
        self.strings.entry(index).or_insert(leaked);
        Symbol(index)
    }

    pub(super) fn resolve(&self, index: u32) -> &'static str {
        self.strings
            .get(&index)
            .map(|entry| *entry)
            .expect("symbol index not present in string table")
    }
}
