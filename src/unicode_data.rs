use crate::codepoint::CodePoint;
use crate::registry::{
    BlockDiff, BlockProvider, CategoryChange, CategoryDiff, CategoryProvider,
};

// Baseline tables for Unicode 10.0, patched forward by the version diffs
// below. Ranges are half-open. The tables cover the scripts the XSD regex
// test suites exercise; a consumer with different needs can plug in its own
// provider.

const MIN_UNICODE_VERSION: &str = "10.0.0";

type RawTable = &'static [(u32, u32)];

const LU: RawTable = &[
    (0x41, 0x5B),
    (0xC0, 0xD7),
    (0xD8, 0xDF),
    (0x391, 0x3A2),
    (0x3A3, 0x3AC),
    (0x400, 0x430),
    (0x531, 0x557),
    (0x10A0, 0x10C6),
    (0x13A0, 0x13F6),
    (0x1F08, 0x1F10),
    (0x2C00, 0x2C2F),
    (0xFF21, 0xFF3B),
    (0x10400, 0x10428),
    (0x1D400, 0x1D41A),
];

const LL: RawTable = &[
    (0x61, 0x7B),
    (0xB5, 0xB6),
    (0xDF, 0xF7),
    (0xF8, 0x100),
    (0x3AC, 0x3CF),
    (0x430, 0x460),
    (0x561, 0x588),
    (0x13F8, 0x13FE),
    (0x1F00, 0x1F08),
    (0x2C30, 0x2C60),
    (0xFF41, 0xFF5B),
    (0x10428, 0x10450),
    (0x1D41A, 0x1D434),
];

const LT: RawTable = &[
    (0x1C5, 0x1C6),
    (0x1C8, 0x1C9),
    (0x1CB, 0x1CC),
    (0x1F2, 0x1F3),
    (0x1F88, 0x1F90),
    (0x1F98, 0x1FA0),
    (0x1FA8, 0x1FB0),
    (0x1FBC, 0x1FBD),
    (0x1FCC, 0x1FCD),
    (0x1FFC, 0x1FFD),
];

const LM: RawTable = &[
    (0x2B0, 0x2C2),
    (0x2C6, 0x2D2),
    (0x374, 0x375),
    (0x37A, 0x37B),
    (0x559, 0x55A),
    (0x640, 0x641),
    (0x6E5, 0x6E7),
    (0x1D2C, 0x1D6B),
    (0x3005, 0x3006),
    (0x30FC, 0x30FF),
    (0xFF70, 0xFF71),
    (0xFF9E, 0xFFA0),
];

const LO: RawTable = &[
    (0xAA, 0xAB),
    (0xBA, 0xBB),
    (0x1BB, 0x1BC),
    (0x1C0, 0x1C4),
    (0x5D0, 0x5EB),
    (0x620, 0x640),
    (0x641, 0x64B),
    (0x66E, 0x670),
    (0x671, 0x6D4),
    (0x904, 0x93A),
    (0x950, 0x951),
    (0x958, 0x962),
    (0xE01, 0xE31),
    (0x2D30, 0x2D68),
    (0x3041, 0x3097),
    (0x30A1, 0x30FB),
    (0x3400, 0x4DC0),
    (0x4E00, 0x9FEB),
    (0xAC00, 0xD7A4),
    (0xF900, 0xFA6E),
    (0x10000, 0x1000C),
    (0x20000, 0x2A6D7),
];

const MN: RawTable = &[
    (0x300, 0x370),
    (0x483, 0x488),
    (0x591, 0x5BE),
    (0x5BF, 0x5C0),
    (0x610, 0x61B),
    (0x64B, 0x660),
    (0x670, 0x671),
    (0x6D6, 0x6DD),
    (0x901, 0x903),
    (0x93C, 0x93D),
    (0x941, 0x949),
    (0xE31, 0xE32),
    (0xE34, 0xE3B),
    (0x20D0, 0x20DD),
    (0xFE00, 0xFE10),
    (0xFE20, 0xFE30),
    (0xE0100, 0xE01F0),
];

const MC: RawTable = &[
    (0x903, 0x904),
    (0x93E, 0x941),
    (0x949, 0x94D),
    (0x982, 0x984),
    (0x9BE, 0x9C1),
    (0x102B, 0x102D),
];

const ME: RawTable = &[
    (0x488, 0x48A),
    (0x1ABE, 0x1ABF),
    (0x20DD, 0x20E1),
    (0x20E2, 0x20E5),
    (0xA670, 0xA673),
];

const ND: RawTable = &[
    (0x30, 0x3A),
    (0x660, 0x66A),
    (0x6F0, 0x6FA),
    (0x7C0, 0x7CA),
    (0x966, 0x970),
    (0x9E6, 0x9F0),
    (0xA66, 0xA70),
    (0xAE6, 0xAF0),
    (0xB66, 0xB70),
    (0xBE6, 0xBF0),
    (0xC66, 0xC70),
    (0xCE6, 0xCF0),
    (0xD66, 0xD70),
    (0xE50, 0xE5A),
    (0xED0, 0xEDA),
    (0xF20, 0xF2A),
    (0x1040, 0x104A),
    (0x17E0, 0x17EA),
    (0x1810, 0x181A),
    (0xFF10, 0xFF1A),
    (0x104A0, 0x104AA),
    (0x1D7CE, 0x1D800),
];

const NL: RawTable = &[
    (0x16EE, 0x16F1),
    (0x2160, 0x2183),
    (0x3007, 0x3008),
    (0x3021, 0x302A),
    (0x10140, 0x10175),
    (0x12400, 0x1246F),
];

const NO: RawTable = &[
    (0xB2, 0xB4),
    (0xB9, 0xBA),
    (0xBC, 0xBF),
    (0x9F4, 0x9FA),
    (0x2070, 0x2071),
    (0x2074, 0x207A),
    (0x2080, 0x208A),
    (0x2150, 0x2160),
    (0x2460, 0x249C),
    (0x2776, 0x2794),
];

const PC: RawTable = &[
    (0x5F, 0x60),
    (0x203F, 0x2041),
    (0x2054, 0x2055),
    (0xFE33, 0xFE35),
    (0xFE4D, 0xFE50),
    (0xFF3F, 0xFF40),
];

const PD: RawTable = &[
    (0x2D, 0x2E),
    (0x58A, 0x58B),
    (0x5BE, 0x5BF),
    (0x1400, 0x1401),
    (0x2010, 0x2016),
    (0x2E17, 0x2E18),
    (0x301C, 0x301D),
    (0x30A0, 0x30A1),
    (0xFE58, 0xFE59),
    (0xFE63, 0xFE64),
    (0xFF0D, 0xFF0E),
];

const PS: RawTable = &[
    (0x28, 0x29),
    (0x5B, 0x5C),
    (0x7B, 0x7C),
    (0xF3A, 0xF3B),
    (0x169B, 0x169C),
    (0x201A, 0x201B),
    (0x201E, 0x201F),
    (0x2045, 0x2046),
    (0x207D, 0x207E),
    (0x208D, 0x208E),
    (0x2308, 0x2309),
    (0x230A, 0x230B),
    (0x3008, 0x3009),
    (0x300A, 0x300B),
    (0x300C, 0x300D),
    (0x300E, 0x300F),
    (0x3010, 0x3011),
    (0xFF08, 0xFF09),
    (0xFF3B, 0xFF3C),
    (0xFF5B, 0xFF5C),
];

const PE: RawTable = &[
    (0x29, 0x2A),
    (0x5D, 0x5E),
    (0x7D, 0x7E),
    (0xF3B, 0xF3C),
    (0x169C, 0x169D),
    (0x2046, 0x2047),
    (0x207E, 0x207F),
    (0x208E, 0x208F),
    (0x2309, 0x230A),
    (0x230B, 0x230C),
    (0x3009, 0x300A),
    (0x300B, 0x300C),
    (0x300D, 0x300E),
    (0x300F, 0x3010),
    (0x3011, 0x3012),
    (0xFF09, 0xFF0A),
    (0xFF3D, 0xFF3E),
    (0xFF5D, 0xFF5E),
];

const PI: RawTable = &[
    (0xAB, 0xAC),
    (0x2018, 0x2019),
    (0x201B, 0x201D),
    (0x201F, 0x2020),
    (0x2039, 0x203A),
    (0x2E02, 0x2E03),
    (0x2E04, 0x2E05),
    (0x2E09, 0x2E0A),
    (0x2E0C, 0x2E0D),
    (0x2E1C, 0x2E1D),
    (0x2E20, 0x2E21),
];

const PF: RawTable = &[
    (0xBB, 0xBC),
    (0x2019, 0x201A),
    (0x201D, 0x201E),
    (0x203A, 0x203B),
    (0x2E03, 0x2E04),
    (0x2E05, 0x2E06),
    (0x2E0A, 0x2E0B),
    (0x2E0D, 0x2E0E),
    (0x2E1D, 0x2E1E),
    (0x2E21, 0x2E22),
];

const PO: RawTable = &[
    (0x21, 0x24),
    (0x25, 0x28),
    (0x2A, 0x2B),
    (0x2C, 0x2D),
    (0x2E, 0x30),
    (0x3A, 0x3C),
    (0x3F, 0x41),
    (0x5C, 0x5D),
    (0xA1, 0xA2),
    (0xA7, 0xA8),
    (0xB6, 0xB8),
    (0xBF, 0xC0),
    (0x37E, 0x37F),
    (0x387, 0x388),
    (0x55A, 0x560),
    (0x589, 0x58A),
    (0x5C0, 0x5C1),
    (0x60C, 0x60D),
    (0x61B, 0x61C),
    (0x61F, 0x620),
    (0x66A, 0x66E),
    (0x6D4, 0x6D5),
    (0x700, 0x70E),
    (0x964, 0x966),
    (0x2016, 0x2018),
    (0x2020, 0x2028),
    (0x2030, 0x2039),
    (0x203B, 0x203F),
    (0x3001, 0x3004),
    (0xFE10, 0xFE17),
    (0xFF01, 0xFF04),
    (0xFF05, 0xFF08),
    (0xFF0C, 0xFF0D),
    (0xFF0E, 0xFF10),
    (0xFF1A, 0xFF1C),
    (0xFF1F, 0xFF21),
];

const ZS: RawTable = &[
    (0x20, 0x21),
    (0xA0, 0xA1),
    (0x1680, 0x1681),
    (0x2000, 0x200B),
    (0x202F, 0x2030),
    (0x205F, 0x2060),
    (0x3000, 0x3001),
];

const ZL: RawTable = &[(0x2028, 0x2029)];

const ZP: RawTable = &[(0x2029, 0x202A)];

const SM: RawTable = &[
    (0x2B, 0x2C),
    (0x3C, 0x3F),
    (0x7C, 0x7D),
    (0x7E, 0x7F),
    (0xAC, 0xAD),
    (0xB1, 0xB2),
    (0xD7, 0xD8),
    (0xF7, 0xF8),
    (0x3F6, 0x3F7),
    (0x606, 0x609),
    (0x2044, 0x2045),
    (0x2052, 0x2053),
    (0x207A, 0x207D),
    (0x208A, 0x208D),
    (0x2140, 0x2145),
    (0x2190, 0x2195),
    (0x2200, 0x2300),
    (0x2A00, 0x2B00),
    (0xFB29, 0xFB2A),
    (0xFF0B, 0xFF0C),
    (0xFF1C, 0xFF1F),
    (0xFF5C, 0xFF5D),
    (0xFF5E, 0xFF5F),
];

const SC: RawTable = &[
    (0x24, 0x25),
    (0xA2, 0xA6),
    (0x58F, 0x590),
    (0x60B, 0x60C),
    (0x9F2, 0x9F4),
    (0xAF1, 0xAF2),
    (0xBF9, 0xBFA),
    (0xE3F, 0xE40),
    (0x17DB, 0x17DC),
    (0x20A0, 0x20C0),
    (0xFDFC, 0xFDFD),
    (0xFE69, 0xFE6A),
    (0xFF04, 0xFF05),
    (0xFFE0, 0xFFE2),
    (0xFFE5, 0xFFE7),
];

const SK: RawTable = &[
    (0x5E, 0x5F),
    (0x60, 0x61),
    (0xA8, 0xA9),
    (0xAF, 0xB0),
    (0xB4, 0xB5),
    (0xB8, 0xB9),
    (0x2C2, 0x2C6),
    (0x2D2, 0x2E0),
    (0x2E5, 0x2EC),
    (0x2ED, 0x2EE),
    (0x2EF, 0x300),
    (0x375, 0x376),
    (0x384, 0x386),
    (0x1FBD, 0x1FBE),
    (0x309B, 0x309D),
    (0xFF3E, 0xFF3F),
    (0xFF40, 0xFF41),
    (0xFFE3, 0xFFE4),
];

const SO: RawTable = &[
    (0xA6, 0xA7),
    (0xA9, 0xAA),
    (0xAE, 0xAF),
    (0xB0, 0xB1),
    (0x482, 0x483),
    (0x60E, 0x610),
    (0x6DE, 0x6DF),
    (0xBF3, 0xBF9),
    (0x2100, 0x2102),
    (0x2103, 0x2107),
    (0x2195, 0x219A),
    (0x2300, 0x2308),
    (0x2400, 0x2427),
    (0x2440, 0x244B),
    (0x249C, 0x24EA),
    (0x2500, 0x25B7),
    (0x2600, 0x2700),
    (0x2800, 0x2900),
    (0x1F300, 0x1F650),
];

const CC: RawTable = &[(0x0, 0x20), (0x7F, 0xA0)];

const CF: RawTable = &[
    (0xAD, 0xAE),
    (0x600, 0x606),
    (0x61C, 0x61D),
    (0x200B, 0x2010),
    (0x202A, 0x202F),
    (0x2060, 0x2065),
    (0x2066, 0x2070),
    (0xFEFF, 0xFF00),
    (0xFFF9, 0xFFFC),
];

const CS: RawTable = &[(0xD800, 0xE000)];

const CO: RawTable = &[
    (0xE000, 0xF900),
    (0xF0000, 0xFFFFE),
    (0x100000, 0x10FFFE),
];

const CN: RawTable = &[
    (0x378, 0x37A),
    (0x380, 0x384),
    (0x38B, 0x38C),
    (0x38D, 0x38E),
    (0x3A2, 0x3A3),
    (0x530, 0x531),
    (0x557, 0x559),
    (0x58B, 0x58D),
    (0x590, 0x591),
    (0x5C8, 0x5D0),
    (0x5EB, 0x5EF),
    (0x5F5, 0x600),
    (0x70E, 0x70F),
    (0x74B, 0x74D),
    (0x7B2, 0x7C0),
    (0x2072, 0x2074),
    (0x208F, 0x2090),
    (0x40000, 0xE0000),
    (0xE01F0, 0xF0000),
];

const RAW_CATEGORIES: &[(&str, RawTable)] = &[
    ("Lu", LU),
    ("Ll", LL),
    ("Lt", LT),
    ("Lm", LM),
    ("Lo", LO),
    ("Mn", MN),
    ("Mc", MC),
    ("Me", ME),
    ("Nd", ND),
    ("Nl", NL),
    ("No", NO),
    ("Pc", PC),
    ("Pd", PD),
    ("Ps", PS),
    ("Pe", PE),
    ("Pi", PI),
    ("Pf", PF),
    ("Po", PO),
    ("Zs", ZS),
    ("Zl", ZL),
    ("Zp", ZP),
    ("Sm", SM),
    ("Sc", SC),
    ("Sk", SK),
    ("So", SO),
    ("Cc", CC),
    ("Cf", CF),
    ("Cs", CS),
    ("Co", CO),
    ("Cn", CN),
];

const CATEGORY_GROUPS: &[(&str, &[RawTable])] = &[
    ("L", &[LU, LL, LT, LM, LO]),
    ("LC", &[LU, LL, LT]),
    ("M", &[MN, MC, ME]),
    ("N", &[ND, NL, NO]),
    ("P", &[PC, PD, PS, PE, PI, PF, PO]),
    ("Z", &[ZS, ZL, ZP]),
    ("S", &[SM, SC, SK, SO]),
    ("C", &[CC, CF, CS, CO, CN]),
];

// Cumulative category patches: version, then per-category excluded and
// inserted entries. Group categories are patched alongside their members.
type RawChange = (&'static str, RawTable, RawTable);

const DIFF_CATEGORIES: &[(&str, &[RawChange])] = &[
    (
        // CJK unified extends to 9FEF, Hanifi Rohingya digits arrive.
        "11.0.0",
        &[
            ("Lo", &[(0x4E00, 0x9FEB)], &[(0x4E00, 0x9FF0)]),
            ("L", &[(0x4E00, 0x9FEB)], &[(0x4E00, 0x9FF0)]),
            ("Nd", &[], &[(0x10D30, 0x10D3A)]),
            ("N", &[], &[(0x10D30, 0x10D3A)]),
        ],
    ),
    (
        // U+32FF SQUARE ERA NAME REIWA.
        "12.1.0",
        &[
            ("So", &[], &[(0x32FF, 0x3300)]),
            ("S", &[], &[(0x32FF, 0x3300)]),
        ],
    ),
    (
        "13.0.0",
        &[
            ("Lo", &[(0x4E00, 0x9FF0)], &[(0x4E00, 0x9FFD)]),
            ("L", &[(0x4E00, 0x9FF0)], &[(0x4E00, 0x9FFD)]),
        ],
    ),
    (
        "14.0.0",
        &[
            ("Lo", &[(0x4E00, 0x9FFD)], &[(0x4E00, 0xA000)]),
            ("L", &[(0x4E00, 0x9FFD)], &[(0x4E00, 0xA000)]),
        ],
    ),
];

const RAW_BLOCKS: &[(&str, (u32, u32))] = &[
    ("Basic Latin", (0x0, 0x80)),
    ("Latin-1 Supplement", (0x80, 0x100)),
    ("Latin Extended-A", (0x100, 0x180)),
    ("Latin Extended-B", (0x180, 0x250)),
    ("IPA Extensions", (0x250, 0x2B0)),
    ("Spacing Modifier Letters", (0x2B0, 0x300)),
    ("Combining Diacritical Marks", (0x300, 0x370)),
    ("Greek and Coptic", (0x370, 0x400)),
    ("Cyrillic", (0x400, 0x500)),
    ("Cyrillic Supplement", (0x500, 0x530)),
    ("Armenian", (0x530, 0x590)),
    ("Hebrew", (0x590, 0x600)),
    ("Arabic", (0x600, 0x700)),
    ("Syriac", (0x700, 0x750)),
    ("Arabic Supplement", (0x750, 0x780)),
    ("Thaana", (0x780, 0x7C0)),
    ("NKo", (0x7C0, 0x800)),
    ("Samaritan", (0x800, 0x840)),
    ("Mandaic", (0x840, 0x860)),
    ("Syriac Supplement", (0x860, 0x870)),
    ("Devanagari", (0x900, 0x980)),
    ("Bengali", (0x980, 0xA00)),
    ("Gurmukhi", (0xA00, 0xA80)),
    ("Gujarati", (0xA80, 0xB00)),
    ("Oriya", (0xB00, 0xB80)),
    ("Tamil", (0xB80, 0xC00)),
    ("Telugu", (0xC00, 0xC80)),
    ("Kannada", (0xC80, 0xD00)),
    ("Malayalam", (0xD00, 0xD80)),
    ("Sinhala", (0xD80, 0xE00)),
    ("Thai", (0xE00, 0xE80)),
    ("Lao", (0xE80, 0xF00)),
    ("Tibetan", (0xF00, 0x1000)),
    ("Myanmar", (0x1000, 0x10A0)),
    ("Georgian", (0x10A0, 0x1100)),
    ("Hangul Jamo", (0x1100, 0x1200)),
    ("Ethiopic", (0x1200, 0x1380)),
    ("Cherokee", (0x13A0, 0x1400)),
    ("Unified Canadian Aboriginal Syllabics", (0x1400, 0x1680)),
    ("Ogham", (0x1680, 0x16A0)),
    ("Runic", (0x16A0, 0x1700)),
    ("Khmer", (0x1780, 0x1800)),
    ("Mongolian", (0x1800, 0x18B0)),
    ("Phonetic Extensions", (0x1D00, 0x1D80)),
    ("Latin Extended Additional", (0x1E00, 0x1F00)),
    ("Greek Extended", (0x1F00, 0x2000)),
    ("General Punctuation", (0x2000, 0x2070)),
    ("Superscripts and Subscripts", (0x2070, 0x20A0)),
    ("Currency Symbols", (0x20A0, 0x20D0)),
    ("Combining Diacritical Marks for Symbols", (0x20D0, 0x2100)),
    ("Letterlike Symbols", (0x2100, 0x2150)),
    ("Number Forms", (0x2150, 0x2190)),
    ("Arrows", (0x2190, 0x2200)),
    ("Mathematical Operators", (0x2200, 0x2300)),
    ("Miscellaneous Technical", (0x2300, 0x2400)),
    ("Control Pictures", (0x2400, 0x2440)),
    ("Optical Character Recognition", (0x2440, 0x2460)),
    ("Enclosed Alphanumerics", (0x2460, 0x2500)),
    ("Box Drawing", (0x2500, 0x2580)),
    ("Block Elements", (0x2580, 0x25A0)),
    ("Geometric Shapes", (0x25A0, 0x2600)),
    ("Miscellaneous Symbols", (0x2600, 0x2700)),
    ("Dingbats", (0x2700, 0x27C0)),
    ("Braille Patterns", (0x2800, 0x2900)),
    ("Glagolitic", (0x2C00, 0x2C60)),
    ("CJK Radicals Supplement", (0x2E80, 0x2F00)),
    ("Kangxi Radicals", (0x2F00, 0x2FE0)),
    ("CJK Symbols and Punctuation", (0x3000, 0x3040)),
    ("Hiragana", (0x3040, 0x30A0)),
    ("Katakana", (0x30A0, 0x3100)),
    ("Bopomofo", (0x3100, 0x3130)),
    ("Hangul Compatibility Jamo", (0x3130, 0x3190)),
    ("Enclosed CJK Letters and Months", (0x3200, 0x3300)),
    ("CJK Compatibility", (0x3300, 0x3400)),
    ("CJK Unified Ideographs Extension A", (0x3400, 0x4DC0)),
    ("Yijing Hexagram Symbols", (0x4DC0, 0x4E00)),
    ("CJK Unified Ideographs", (0x4E00, 0xA000)),
    ("Yi Syllables", (0xA000, 0xA490)),
    ("Yi Radicals", (0xA490, 0xA4D0)),
    ("Hangul Syllables", (0xAC00, 0xD7B0)),
    ("High Surrogates", (0xD800, 0xDB80)),
    ("High Private Use Surrogates", (0xDB80, 0xDC00)),
    ("Low Surrogates", (0xDC00, 0xE000)),
    ("Private Use Area", (0xE000, 0xF900)),
    ("CJK Compatibility Ideographs", (0xF900, 0xFB00)),
    ("Alphabetic Presentation Forms", (0xFB00, 0xFB50)),
    ("Arabic Presentation Forms-A", (0xFB50, 0xFE00)),
    ("Variation Selectors", (0xFE00, 0xFE10)),
    ("Combining Half Marks", (0xFE20, 0xFE30)),
    ("CJK Compatibility Forms", (0xFE30, 0xFE50)),
    ("Small Form Variants", (0xFE50, 0xFE70)),
    ("Arabic Presentation Forms-B", (0xFE70, 0xFF00)),
    ("Halfwidth and Fullwidth Forms", (0xFF00, 0xFFF0)),
    ("Specials", (0xFFF0, 0x10000)),
    ("Linear B Syllabary", (0x10000, 0x10080)),
    ("Linear B Ideograms", (0x10080, 0x10100)),
    ("Aegean Numbers", (0x10100, 0x10140)),
    ("Ancient Greek Numbers", (0x10140, 0x10190)),
    ("Deseret", (0x10400, 0x10450)),
    ("Shavian", (0x10450, 0x10480)),
    ("Osmanya", (0x10480, 0x104B0)),
    ("Cuneiform", (0x12000, 0x12400)),
    ("Cuneiform Numbers and Punctuation", (0x12400, 0x12480)),
    ("Byzantine Musical Symbols", (0x1D000, 0x1D100)),
    ("Musical Symbols", (0x1D100, 0x1D200)),
    ("Mathematical Alphanumeric Symbols", (0x1D400, 0x1D800)),
    ("Mahjong Tiles", (0x1F000, 0x1F030)),
    ("Domino Tiles", (0x1F030, 0x1F0A0)),
    ("Playing Cards", (0x1F0A0, 0x1F100)),
    ("Enclosed Alphanumeric Supplement", (0x1F100, 0x1F200)),
    ("Enclosed Ideographic Supplement", (0x1F200, 0x1F300)),
    ("Miscellaneous Symbols and Pictographs", (0x1F300, 0x1F600)),
    ("Emoticons", (0x1F600, 0x1F650)),
    ("Ornamental Dingbats", (0x1F650, 0x1F680)),
    ("Transport and Map Symbols", (0x1F680, 0x1F700)),
    ("Alchemical Symbols", (0x1F700, 0x1F780)),
    ("Geometric Shapes Extended", (0x1F780, 0x1F800)),
    ("Supplemental Arrows-C", (0x1F800, 0x1F900)),
    ("Supplemental Symbols and Pictographs", (0x1F900, 0x1FA00)),
    ("CJK Unified Ideographs Extension B", (0x20000, 0x2A6E0)),
    ("CJK Compatibility Ideographs Supplement", (0x2F800, 0x2FA20)),
    ("Tags", (0xE0000, 0xE0080)),
    ("Variation Selectors Supplement", (0xE0100, 0xE01F0)),
    ("Supplementary Private Use Area-A", (0xF0000, 0x100000)),
    ("Supplementary Private Use Area-B", (0x100000, 0x110000)),
];

const DIFF_BLOCKS: &[(&str, &[(&str, (u32, u32))])] = &[
    (
        "11.0.0",
        &[
            ("Georgian Extended", (0x1C90, 0x1CC0)),
            ("Hanifi Rohingya", (0x10D00, 0x10D40)),
            ("Chess Symbols", (0x1FA00, 0x1FA70)),
        ],
    ),
    (
        "12.0.0",
        &[
            ("Small Kana Extension", (0x1B130, 0x1B170)),
            ("Symbols and Pictographs Extended-A", (0x1FA70, 0x1FB00)),
        ],
    ),
    (
        "13.0.0",
        &[
            ("Tangut Supplement", (0x18D00, 0x18D90)),
            ("Symbols for Legacy Computing", (0x1FB00, 0x1FC00)),
            ("CJK Unified Ideographs Extension G", (0x30000, 0x31350)),
        ],
    ),
    (
        "14.0.0",
        &[
            ("Arabic Extended-B", (0x870, 0x8A0)),
            ("Ethiopic Extended-B", (0x1E7E0, 0x1E800)),
        ],
    ),
    (
        "15.0.0",
        &[
            ("Arabic Extended-C", (0x10EC0, 0x10F00)),
            ("Cyrillic Extended-D", (0x1E030, 0x1E090)),
            ("CJK Unified Ideographs Extension H", (0x31350, 0x323B0)),
        ],
    ),
];

fn to_entries(ranges: &[(u32, u32)]) -> Vec<CodePoint> {
    ranges
        .iter()
        .map(|&(lo, hi)| {
            if hi == lo + 1 {
                CodePoint::Single(lo)
            } else {
                CodePoint::Range(lo, hi)
            }
        })
        .collect()
}

fn grouped(members: &[RawTable]) -> Vec<CodePoint> {
    let mut ranges: Vec<(u32, u32)> = members.iter().flat_map(|table| table.iter().copied()).collect();
    ranges.sort_by_key(|&(lo, _)| lo);
    to_entries(&ranges)
}

pub struct BuiltinCategories;

impl CategoryProvider for BuiltinCategories {
    fn min_version(&self) -> &str {
        MIN_UNICODE_VERSION
    }

    fn raw_categories(&self) -> Vec<(String, Vec<CodePoint>)> {
        let mut out: Vec<(String, Vec<CodePoint>)> = RAW_CATEGORIES
            .iter()
            .map(|&(name, table)| (name.to_string(), to_entries(table)))
            .collect();
        for &(name, members) in CATEGORY_GROUPS {
            out.push((name.to_string(), grouped(members)));
        }
        out
    }

    fn diffs(&self) -> Vec<CategoryDiff> {
        DIFF_CATEGORIES
            .iter()
            .map(|&(version, changes)| CategoryDiff {
                version: version.to_string(),
                changes: changes
                    .iter()
                    .map(|&(name, exclude, insert)| {
                        (
                            name.to_string(),
                            CategoryChange {
                                exclude: to_entries(exclude),
                                insert: to_entries(insert),
                            },
                        )
                    })
                    .collect(),
            })
            .collect()
    }
}

pub struct BuiltinBlocks;

impl BlockProvider for BuiltinBlocks {
    fn min_version(&self) -> &str {
        MIN_UNICODE_VERSION
    }

    fn raw_blocks(&self) -> Vec<(String, (u32, u32))> {
        RAW_BLOCKS
            .iter()
            .map(|&(name, range)| (name.to_string(), range))
            .collect()
    }

    fn diffs(&self) -> Vec<BlockDiff> {
        DIFF_BLOCKS
            .iter()
            .map(|&(version, blocks)| BlockDiff {
                version: version.to_string(),
                blocks: blocks
                    .iter()
                    .map(|&(name, range)| (name.to_string(), range))
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use crate::registry::SubsetRegistry;

    #[test]
    fn baseline_tables_are_sorted_and_disjoint() {
        for &(name, table) in RAW_CATEGORIES {
            for window in table.windows(2) {
                assert!(
                    window[0].1 <= window[1].0,
                    "table {name} has unsorted or overlapping entries"
                );
            }
        }
    }

    #[test]
    fn builtin_install_covers_the_standard_categories() -> Result<()> {
        let registry = SubsetRegistry::install(&BuiltinCategories, &BuiltinBlocks)?;
        for name in ["Lu", "Ll", "Nd", "L", "M", "N", "P", "Z", "S", "C"] {
            assert!(!registry.category(name)?.is_empty(), "category {name}");
        }
        assert!(registry.category("Lu")?.contains('A' as u32));
        assert!(registry.category("Ll")?.contains('a' as u32));
        assert!(!registry.category("Lu")?.contains('a' as u32));
        Ok(())
    }

    #[test]
    fn category_diffs_apply_up_to_the_runtime_version() -> Result<()> {
        let registry = SubsetRegistry::install(&BuiltinCategories, &BuiltinBlocks)?;
        // REIWA was added to So in 12.1 and every supported runtime has it.
        assert!(registry.category("So")?.contains(0x32FF));
        assert!(registry.category("S")?.contains(0x32FF));
        // The CJK unified block grew to 9FFF by 14.0.
        assert!(registry.category("Lo")?.contains(0x9FFF));
        assert!(registry.category("Nd")?.contains(0x10D30));
        Ok(())
    }

    #[test]
    fn builtin_blocks_resolve_after_diffs() -> Result<()> {
        let registry = SubsetRegistry::install(&BuiltinCategories, &BuiltinBlocks)?;
        assert!(registry.block("BasicLatin")?.contains('A' as u32));
        assert!(registry.block("SymbolsForLegacyComputing")?.contains(0x1FB00));
        assert!(registry.block("GeorgianExtended")?.contains(0x1C90));
        Ok(())
    }
}
