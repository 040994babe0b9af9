//! AAC Huffman 码本静态数据 (ISO/IEC 13818-7 附录 A).
//!
//! 每个条目为 `(码字, 码字位长)`, 数组下标即符号索引.

/// 比例因子码本 (索引 60 对应差值 0)
#[rustfmt::skip]
pub(crate) const SCALEFACTOR_CODES: [(u32, u8); 121] = [
    (0x3ffe8, 18), (0x3ffe6, 18), (0x3ffe7, 18), (0x3ffe5, 18), (0x7fff5, 19),
    (0x7fff1, 19), (0x7ffed, 19), (0x7fff6, 19), (0x7ffee, 19), (0x7ffef, 19),
    (0x7fff0, 19), (0x7fffc, 19), (0x7fffd, 19), (0x7ffff, 19), (0x7fffe, 19),
    (0x7fff7, 19), (0x7fff8, 19), (0x7fffb, 19), (0x7fff9, 19), (0x3ffe4, 18),
    (0x7fffa, 19), (0x3ffe3, 18), (0x1ffef, 17), (0x1fff0, 17), (0x0fff5, 16),
    (0x1ffee, 17), (0x0fff2, 16), (0x0fff3, 16), (0x0fff4, 16), (0x0fff1, 16),
    (0x07ff6, 15), (0x07ff7, 15), (0x03ff9, 14), (0x03ff5, 14), (0x03ff7, 14),
    (0x03ff3, 14), (0x03ff6, 14), (0x03ff2, 14), (0x01ff7, 13), (0x01ff5, 13),
    (0x00ff9, 12), (0x00ff7, 12), (0x00ff6, 12), (0x007f9, 11), (0x00ff4, 12),
    (0x007f8, 11), (0x003f9, 10), (0x003f7, 10), (0x003f5, 10), (0x001f8, 9),
    (0x001f7, 9), (0x000fa, 8), (0x000f8, 8), (0x000f6, 8), (0x00079, 7),
    (0x0003a, 6), (0x00038, 6), (0x0001a, 5), (0x0000b, 4), (0x00004, 3),
    (0x00000, 1), (0x0000a, 4), (0x0000c, 4), (0x0001b, 5), (0x00039, 6),
    (0x0003b, 6), (0x00078, 7), (0x0007a, 7), (0x000f7, 8), (0x000f9, 8),
    (0x001f6, 9), (0x001f9, 9), (0x003f4, 10), (0x003f6, 10), (0x003f8, 10),
    (0x007f5, 11), (0x007f4, 11), (0x007f6, 11), (0x007f7, 11), (0x00ff5, 12),
    (0x00ff8, 12), (0x01ff4, 13), (0x01ff6, 13), (0x01ff8, 13), (0x03ff8, 14),
    (0x03ff4, 14), (0x0fff0, 16), (0x07ff4, 15), (0x0fff6, 16), (0x07ff5, 15),
    (0x3ffe2, 18), (0x7ffd9, 19), (0x7ffda, 19), (0x7ffdb, 19), (0x7ffdc, 19),
    (0x7ffdd, 19), (0x7ffde, 19), (0x7ffd8, 19), (0x7ffd2, 19), (0x7ffd3, 19),
    (0x7ffd4, 19), (0x7ffd5, 19), (0x7ffd6, 19), (0x7fff2, 19), (0x7ffdf, 19),
    (0x7ffe7, 19), (0x7ffe8, 19), (0x7ffe9, 19), (0x7ffea, 19), (0x7ffeb, 19),
    (0x7ffe6, 19), (0x7ffe0, 19), (0x7ffe1, 19), (0x7ffe2, 19), (0x7ffe3, 19),
    (0x7ffe4, 19), (0x7ffe5, 19), (0x7ffd7, 19), (0x7ffec, 19), (0x7fff4, 19),
    (0x7fff3, 19),
];

/// 频谱码本 1: quad, signed, LAV=1
#[rustfmt::skip]
pub(crate) const SPECTRUM_CODES_1: [(u16, u8); 81] = [
    (0x7f8, 11), (0x1f1,  9), (0x7fd, 11), (0x3f5, 10), (0x068,  7), (0x3f0, 10),
    (0x7f7, 11), (0x1ec,  9), (0x7f5, 11), (0x3f1, 10), (0x072,  7), (0x3f4, 10),
    (0x074,  7), (0x011,  5), (0x076,  7), (0x1eb,  9), (0x06c,  7), (0x3f6, 10),
    (0x7fc, 11), (0x1e1,  9), (0x7f1, 11), (0x1f0,  9), (0x061,  7), (0x1f6,  9),
    (0x7f2, 11), (0x1ea,  9), (0x7fb, 11), (0x1f2,  9), (0x069,  7), (0x1ed,  9),
    (0x077,  7), (0x017,  5), (0x06f,  7), (0x1e6,  9), (0x064,  7), (0x1e5,  9),
    (0x067,  7), (0x015,  5), (0x062,  7), (0x012,  5), (0x000,  1), (0x014,  5),
    (0x065,  7), (0x016,  5), (0x06d,  7), (0x1e9,  9), (0x063,  7), (0x1e4,  9),
    (0x06b,  7), (0x013,  5), (0x071,  7), (0x1e3,  9), (0x070,  7), (0x1f3,  9),
    (0x7fe, 11), (0x1e7,  9), (0x7f3, 11), (0x1ef,  9), (0x060,  7), (0x1ee,  9),
    (0x7f0, 11), (0x1e2,  9), (0x7fa, 11), (0x3f3, 10), (0x06a,  7), (0x1e8,  9),
    (0x075,  7), (0x010,  5), (0x073,  7), (0x1f4,  9), (0x06e,  7), (0x3f7, 10),
    (0x7f6, 11), (0x1e0,  9), (0x7f9, 11), (0x3f2, 10), (0x066,  7), (0x1f5,  9),
    (0x7ff, 11), (0x1f7,  9), (0x7f4, 11),
];

/// 频谱码本 2: quad, signed, LAV=1
#[rustfmt::skip]
pub(crate) const SPECTRUM_CODES_2: [(u16, u8); 81] = [
    (0x1f3,  9), (0x06f,  7), (0x1fd,  9), (0x0eb,  8), (0x023,  6), (0x0ea,  8),
    (0x1f7,  9), (0x0e8,  8), (0x1fa,  9), (0x0f2,  8), (0x02d,  6), (0x070,  7),
    (0x020,  6), (0x006,  5), (0x02b,  6), (0x06e,  7), (0x028,  6), (0x0e9,  8),
    (0x1f9,  9), (0x066,  7), (0x0f8,  8), (0x0e7,  8), (0x01b,  6), (0x0f1,  8),
    (0x1f4,  9), (0x06b,  7), (0x1f5,  9), (0x0ec,  8), (0x02a,  6), (0x06c,  7),
    (0x02c,  6), (0x00a,  5), (0x027,  6), (0x067,  7), (0x01a,  6), (0x0f5,  8),
    (0x024,  6), (0x008,  5), (0x01f,  6), (0x009,  5), (0x000,  3), (0x007,  5),
    (0x01d,  6), (0x00b,  5), (0x030,  6), (0x0ef,  8), (0x01c,  6), (0x064,  7),
    (0x01e,  6), (0x00c,  5), (0x029,  6), (0x0f3,  8), (0x02f,  6), (0x0f0,  8),
    (0x1fc,  9), (0x071,  7), (0x1f2,  9), (0x0f4,  8), (0x021,  6), (0x0e6,  8),
    (0x0f7,  8), (0x068,  7), (0x1f8,  9), (0x0ee,  8), (0x022,  6), (0x065,  7),
    (0x031,  6), (0x002,  4), (0x026,  6), (0x0ed,  8), (0x025,  6), (0x06a,  7),
    (0x1fb,  9), (0x072,  7), (0x1fe,  9), (0x069,  7), (0x02e,  6), (0x0f6,  8),
    (0x1ff,  9), (0x06d,  7), (0x1f6,  9),
];

/// 频谱码本 3: quad, unsigned, LAV=2
#[rustfmt::skip]
pub(crate) const SPECTRUM_CODES_3: [(u16, u8); 81] = [
    (0x0000,  1), (0x0009,  4), (0x00ef,  8), (0x000b,  4), (0x0019,  5), (0x00f0,  8),
    (0x01eb,  9), (0x01e6,  9), (0x03f2, 10), (0x000a,  4), (0x0035,  6), (0x01ef,  9),
    (0x0034,  6), (0x0037,  6), (0x01e9,  9), (0x01ed,  9), (0x01e7,  9), (0x03f3, 10),
    (0x01ee,  9), (0x03ed, 10), (0x1ffa, 13), (0x01ec,  9), (0x01f2,  9), (0x07f9, 11),
    (0x07f8, 11), (0x03f8, 10), (0x0ff8, 12), (0x0008,  4), (0x0038,  6), (0x03f6, 10),
    (0x0036,  6), (0x0075,  7), (0x03f1, 10), (0x03eb, 10), (0x03ec, 10), (0x0ff4, 12),
    (0x0018,  5), (0x0076,  7), (0x07f4, 11), (0x0039,  6), (0x0074,  7), (0x03ef, 10),
    (0x01f3,  9), (0x01f4,  9), (0x07f6, 11), (0x01e8,  9), (0x03ea, 10), (0x1ffc, 13),
    (0x00f2,  8), (0x01f1,  9), (0x0ffb, 12), (0x03f5, 10), (0x07f3, 11), (0x0ffc, 12),
    (0x00ee,  8), (0x03f7, 10), (0x7ffe, 15), (0x01f0,  9), (0x07f5, 11), (0x7ffd, 15),
    (0x1ffb, 13), (0x3ffa, 14), (0xffff, 16), (0x00f1,  8), (0x03f0, 10), (0x3ffc, 14),
    (0x01ea,  9), (0x03ee, 10), (0x3ffb, 14), (0x0ff6, 12), (0x0ffa, 12), (0x7ffc, 15),
    (0x07f2, 11), (0x0ff5, 12), (0xfffe, 16), (0x03f4, 10), (0x07f7, 11), (0x7ffb, 15),
    (0x0ff7, 12), (0x0ff9, 12), (0x7ffa, 15),
];

/// 频谱码本 4: quad, unsigned, LAV=2
#[rustfmt::skip]
pub(crate) const SPECTRUM_CODES_4: [(u16, u8); 81] = [
    (0x007,  4), (0x016,  5), (0x0f6,  8), (0x018,  5), (0x008,  4), (0x0ef,  8),
    (0x1ef,  9), (0x0f3,  8), (0x7f8, 11), (0x019,  5), (0x017,  5), (0x0ed,  8),
    (0x015,  5), (0x001,  4), (0x0e2,  8), (0x0f0,  8), (0x070,  7), (0x3f0, 10),
    (0x1ee,  9), (0x0f1,  8), (0x7fa, 11), (0x0ee,  8), (0x0e4,  8), (0x3f2, 10),
    (0x7f6, 11), (0x3ef, 10), (0x7fd, 11), (0x005,  4), (0x014,  5), (0x0f2,  8),
    (0x009,  4), (0x004,  4), (0x0e5,  8), (0x0f4,  8), (0x0e8,  8), (0x3f4, 10),
    (0x006,  4), (0x002,  4), (0x0e7,  8), (0x003,  4), (0x000,  4), (0x06b,  7),
    (0x0e3,  8), (0x069,  7), (0x1f3,  9), (0x0eb,  8), (0x0e6,  8), (0x3f6, 10),
    (0x06e,  7), (0x06a,  7), (0x1f4,  9), (0x3ec, 10), (0x1f0,  9), (0x3f9, 10),
    (0x0f5,  8), (0x0ec,  8), (0x7fb, 11), (0x0ea,  8), (0x06f,  7), (0x3f7, 10),
    (0x7f9, 11), (0x3f3, 10), (0xfff, 12), (0x0e9,  8), (0x06d,  7), (0x3f8, 10),
    (0x06c,  7), (0x068,  7), (0x1f5,  9), (0x3ee, 10), (0x1f2,  9), (0x7f4, 11),
    (0x7f7, 11), (0x3f1, 10), (0xffe, 12), (0x3ed, 10), (0x1f1,  9), (0x7f5, 11),
    (0x7fe, 11), (0x3f5, 10), (0x7fc, 11),
];

/// 频谱码本 5: pair, signed, LAV=4
#[rustfmt::skip]
pub(crate) const SPECTRUM_CODES_5: [(u16, u8); 81] = [
    (0x1fff, 13), (0x0ff7, 12), (0x07f4, 11), (0x07e8, 11), (0x03f1, 10), (0x07ee, 11),
    (0x07f9, 11), (0x0ff8, 12), (0x1ffd, 13), (0x0ffd, 12), (0x07f1, 11), (0x03e8, 10),
    (0x01e8,  9), (0x00f0,  8), (0x01ec,  9), (0x03ee, 10), (0x07f2, 11), (0x0ffa, 12),
    (0x0ff4, 12), (0x03ef, 10), (0x01f2,  9), (0x00e8,  8), (0x0070,  7), (0x00ec,  8),
    (0x01f0,  9), (0x03ea, 10), (0x07f3, 11), (0x07eb, 11), (0x01eb,  9), (0x00ea,  8),
    (0x001a,  5), (0x0008,  4), (0x0019,  5), (0x00ee,  8), (0x01ef,  9), (0x07ed, 11),
    (0x03f0, 10), (0x00f2,  8), (0x0073,  7), (0x000b,  4), (0x0000,  1), (0x000a,  4),
    (0x0071,  7), (0x00f3,  8), (0x07e9, 11), (0x07ef, 11), (0x01ee,  9), (0x00ef,  8),
    (0x0018,  5), (0x0009,  4), (0x001b,  5), (0x00eb,  8), (0x01e9,  9), (0x07ec, 11),
    (0x07f6, 11), (0x03eb, 10), (0x01f3,  9), (0x00ed,  8), (0x0072,  7), (0x00e9,  8),
    (0x01f1,  9), (0x03ed, 10), (0x07f7, 11), (0x0ff6, 12), (0x07f0, 11), (0x03e9, 10),
    (0x01ed,  9), (0x00f1,  8), (0x01ea,  9), (0x03ec, 10), (0x07f8, 11), (0x0ff9, 12),
    (0x1ffc, 13), (0x0ffc, 12), (0x0ff5, 12), (0x07ea, 11), (0x03f3, 10), (0x03f2, 10),
    (0x07f5, 11), (0x0ffb, 12), (0x1ffe, 13),
];

/// 频谱码本 6: pair, signed, LAV=4
#[rustfmt::skip]
pub(crate) const SPECTRUM_CODES_6: [(u16, u8); 81] = [
    (0x7fe, 11), (0x3fd, 10), (0x1f1,  9), (0x1eb,  9), (0x1f4,  9), (0x1ea,  9),
    (0x1f0,  9), (0x3fc, 10), (0x7fd, 11), (0x3f6, 10), (0x1e5,  9), (0x0ea,  8),
    (0x06c,  7), (0x071,  7), (0x068,  7), (0x0f0,  8), (0x1e6,  9), (0x3f7, 10),
    (0x1f3,  9), (0x0ef,  8), (0x032,  6), (0x027,  6), (0x028,  6), (0x026,  6),
    (0x031,  6), (0x0eb,  8), (0x1f7,  9), (0x1e8,  9), (0x06f,  7), (0x02e,  6),
    (0x008,  4), (0x004,  4), (0x006,  4), (0x029,  6), (0x06b,  7), (0x1ee,  9),
    (0x1ef,  9), (0x072,  7), (0x02d,  6), (0x002,  4), (0x000,  4), (0x003,  4),
    (0x02f,  6), (0x073,  7), (0x1fa,  9), (0x1e7,  9), (0x06e,  7), (0x02b,  6),
    (0x007,  4), (0x001,  4), (0x005,  4), (0x02c,  6), (0x06d,  7), (0x1ec,  9),
    (0x1f9,  9), (0x0ee,  8), (0x030,  6), (0x024,  6), (0x02a,  6), (0x025,  6),
    (0x033,  6), (0x0ec,  8), (0x1f2,  9), (0x3f8, 10), (0x1e4,  9), (0x0ed,  8),
    (0x06a,  7), (0x070,  7), (0x069,  7), (0x074,  7), (0x0f1,  8), (0x3fa, 10),
    (0x7ff, 11), (0x3f9, 10), (0x1f6,  9), (0x1ed,  9), (0x1f8,  9), (0x1e9,  9),
    (0x1f5,  9), (0x3fb, 10), (0x7fc, 11),
];

/// 频谱码本 7: pair, unsigned, LAV=7
#[rustfmt::skip]
pub(crate) const SPECTRUM_CODES_7: [(u16, u8); 64] = [
    (0x000,  1), (0x005,  3), (0x037,  6), (0x074,  7), (0x0f2,  8), (0x1eb,  9),
    (0x3ed, 10), (0x7f7, 11), (0x004,  3), (0x00c,  4), (0x035,  6), (0x071,  7),
    (0x0ec,  8), (0x0ee,  8), (0x1ee,  9), (0x1f5,  9), (0x036,  6), (0x034,  6),
    (0x072,  7), (0x0ea,  8), (0x0f1,  8), (0x1e9,  9), (0x1f3,  9), (0x3f5, 10),
    (0x073,  7), (0x070,  7), (0x0eb,  8), (0x0f0,  8), (0x1f1,  9), (0x1f0,  9),
    (0x3ec, 10), (0x3fa, 10), (0x0f3,  8), (0x0ed,  8), (0x1e8,  9), (0x1ef,  9),
    (0x3ef, 10), (0x3f1, 10), (0x3f9, 10), (0x7fb, 11), (0x1ed,  9), (0x0ef,  8),
    (0x1ea,  9), (0x1f2,  9), (0x3f3, 10), (0x3f8, 10), (0x7f9, 11), (0x7fc, 11),
    (0x3ee, 10), (0x1ec,  9), (0x1f4,  9), (0x3f4, 10), (0x3f7, 10), (0x7f8, 11),
    (0xffd, 12), (0xffe, 12), (0x7f6, 11), (0x3f0, 10), (0x3f2, 10), (0x3f6, 10),
    (0x7fa, 11), (0x7fd, 11), (0xffc, 12), (0xfff, 12),
];

/// 频谱码本 8: pair, unsigned, LAV=7
#[rustfmt::skip]
pub(crate) const SPECTRUM_CODES_8: [(u16, u8); 64] = [
    (0x00e,  5), (0x005,  4), (0x010,  5), (0x030,  6), (0x06f,  7), (0x0f1,  8),
    (0x1fa,  9), (0x3fe, 10), (0x003,  4), (0x000,  3), (0x004,  4), (0x012,  5),
    (0x02c,  6), (0x06a,  7), (0x075,  7), (0x0f8,  8), (0x00f,  5), (0x002,  4),
    (0x006,  4), (0x014,  5), (0x02e,  6), (0x069,  7), (0x072,  7), (0x0f5,  8),
    (0x02f,  6), (0x011,  5), (0x013,  5), (0x02a,  6), (0x032,  6), (0x06c,  7),
    (0x0ec,  8), (0x0fa,  8), (0x071,  7), (0x02b,  6), (0x02d,  6), (0x031,  6),
    (0x06d,  7), (0x070,  7), (0x0f2,  8), (0x1f9,  9), (0x0ef,  8), (0x068,  7),
    (0x033,  6), (0x06b,  7), (0x06e,  7), (0x0ee,  8), (0x0f9,  8), (0x3fc, 10),
    (0x1f8,  9), (0x074,  7), (0x073,  7), (0x0ed,  8), (0x0f0,  8), (0x0f6,  8),
    (0x1f6,  9), (0x1fd,  9), (0x3fd, 10), (0x0f3,  8), (0x0f4,  8), (0x0f7,  8),
    (0x1f7,  9), (0x1fb,  9), (0x1fc,  9), (0x3ff, 10),
];

/// 频谱码本 9: pair, unsigned, LAV=12
#[rustfmt::skip]
pub(crate) const SPECTRUM_CODES_9: [(u16, u8); 169] = [
    (0x0000,  1), (0x0005,  3), (0x0037,  6), (0x00e7,  8), (0x01de,  9), (0x03ce, 10),
    (0x03d9, 10), (0x07c8, 11), (0x07cd, 11), (0x0fc8, 12), (0x0fdd, 12), (0x1fe4, 13),
    (0x1fec, 13), (0x0004,  3), (0x000c,  4), (0x0035,  6), (0x0072,  7), (0x00ea,  8),
    (0x00ed,  8), (0x01e2,  9), (0x03d1, 10), (0x03d3, 10), (0x03e0, 10), (0x07d8, 11),
    (0x0fcf, 12), (0x0fd5, 12), (0x0036,  6), (0x0034,  6), (0x0071,  7), (0x00e8,  8),
    (0x00ec,  8), (0x01e1,  9), (0x03cf, 10), (0x03dd, 10), (0x03db, 10), (0x07d0, 11),
    (0x0fc7, 12), (0x0fd4, 12), (0x0fe4, 12), (0x00e6,  8), (0x0070,  7), (0x00e9,  8),
    (0x01dd,  9), (0x01e3,  9), (0x03d2, 10), (0x03dc, 10), (0x07cc, 11), (0x07ca, 11),
    (0x07de, 11), (0x0fd8, 12), (0x0fea, 12), (0x1fdb, 13), (0x01df,  9), (0x00eb,  8),
    (0x01dc,  9), (0x01e6,  9), (0x03d5, 10), (0x03de, 10), (0x07cb, 11), (0x07dd, 11),
    (0x07dc, 11), (0x0fcd, 12), (0x0fe2, 12), (0x0fe7, 12), (0x1fe1, 13), (0x03d0, 10),
    (0x01e0,  9), (0x01e4,  9), (0x03d6, 10), (0x07c5, 11), (0x07d1, 11), (0x07db, 11),
    (0x0fd2, 12), (0x07e0, 11), (0x0fd9, 12), (0x0feb, 12), (0x1fe3, 13), (0x1fe9, 13),
    (0x07c4, 11), (0x01e5,  9), (0x03d7, 10), (0x07c6, 11), (0x07cf, 11), (0x07da, 11),
    (0x0fcb, 12), (0x0fda, 12), (0x0fe3, 12), (0x0fe9, 12), (0x1fe6, 13), (0x1ff3, 13),
    (0x1ff7, 13), (0x07d3, 11), (0x03d8, 10), (0x03e1, 10), (0x07d4, 11), (0x07d9, 11),
    (0x0fd3, 12), (0x0fde, 12), (0x1fdd, 13), (0x1fd9, 13), (0x1fe2, 13), (0x1fea, 13),
    (0x1ff1, 13), (0x1ff6, 13), (0x07d2, 11), (0x03d4, 10), (0x03da, 10), (0x07c7, 11),
    (0x07d7, 11), (0x07e2, 11), (0x0fce, 12), (0x0fdb, 12), (0x1fd8, 13), (0x1fee, 13),
    (0x3ff0, 14), (0x1ff4, 13), (0x3ff2, 14), (0x07e1, 11), (0x03df, 10), (0x07c9, 11),
    (0x07d6, 11), (0x0fca, 12), (0x0fd0, 12), (0x0fe5, 12), (0x0fe6, 12), (0x1feb, 13),
    (0x1fef, 13), (0x3ff3, 14), (0x3ff4, 14), (0x3ff5, 14), (0x0fe0, 12), (0x07ce, 11),
    (0x07d5, 11), (0x0fc6, 12), (0x0fd1, 12), (0x0fe1, 12), (0x1fe0, 13), (0x1fe8, 13),
    (0x1ff0, 13), (0x3ff1, 14), (0x3ff8, 14), (0x3ff6, 14), (0x7ffc, 15), (0x0fe8, 12),
    (0x07df, 11), (0x0fc9, 12), (0x0fd7, 12), (0x0fdc, 12), (0x1fdc, 13), (0x1fdf, 13),
    (0x1fed, 13), (0x1ff5, 13), (0x3ff9, 14), (0x3ffb, 14), (0x7ffd, 15), (0x7ffe, 15),
    (0x1fe7, 13), (0x0fcc, 12), (0x0fd6, 12), (0x0fdf, 12), (0x1fde, 13), (0x1fda, 13),
    (0x1fe5, 13), (0x1ff2, 13), (0x3ffa, 14), (0x3ff7, 14), (0x3ffc, 14), (0x3ffd, 14),
    (0x7fff, 15),
];

/// 频谱码本 10: pair, unsigned, LAV=12
#[rustfmt::skip]
pub(crate) const SPECTRUM_CODES_10: [(u16, u8); 169] = [
    (0x022,  6), (0x008,  5), (0x01d,  6), (0x026,  6), (0x05f,  7), (0x0d3,  8),
    (0x1cf,  9), (0x3d0, 10), (0x3d7, 10), (0x3ed, 10), (0x7f0, 11), (0x7f6, 11),
    (0xffd, 12), (0x007,  5), (0x000,  4), (0x001,  4), (0x009,  5), (0x020,  6),
    (0x054,  7), (0x060,  7), (0x0d5,  8), (0x0dc,  8), (0x1d4,  9), (0x3cd, 10),
    (0x3de, 10), (0x7e7, 11), (0x01c,  6), (0x002,  4), (0x006,  5), (0x00c,  5),
    (0x01e,  6), (0x028,  6), (0x05b,  7), (0x0cd,  8), (0x0d9,  8), (0x1ce,  9),
    (0x1dc,  9), (0x3d9, 10), (0x3f1, 10), (0x025,  6), (0x00b,  5), (0x00a,  5),
    (0x00d,  5), (0x024,  6), (0x057,  7), (0x061,  7), (0x0cc,  8), (0x0dd,  8),
    (0x1cc,  9), (0x1de,  9), (0x3d3, 10), (0x3e7, 10), (0x05d,  7), (0x021,  6),
    (0x01f,  6), (0x023,  6), (0x027,  6), (0x059,  7), (0x064,  7), (0x0d8,  8),
    (0x0df,  8), (0x1d2,  9), (0x1e2,  9), (0x3dd, 10), (0x3ee, 10), (0x0d1,  8),
    (0x055,  7), (0x029,  6), (0x056,  7), (0x058,  7), (0x062,  7), (0x0ce,  8),
    (0x0e0,  8), (0x0e2,  8), (0x1da,  9), (0x3d4, 10), (0x3e3, 10), (0x7eb, 11),
    (0x1c9,  9), (0x05e,  7), (0x05a,  7), (0x05c,  7), (0x063,  7), (0x0ca,  8),
    (0x0da,  8), (0x1c7,  9), (0x1ca,  9), (0x1e0,  9), (0x3db, 10), (0x3e8, 10),
    (0x7ec, 11), (0x1e3,  9), (0x0d2,  8), (0x0cb,  8), (0x0d0,  8), (0x0d7,  8),
    (0x0db,  8), (0x1c6,  9), (0x1d5,  9), (0x1d8,  9), (0x3ca, 10), (0x3da, 10),
    (0x7ea, 11), (0x7f1, 11), (0x1e1,  9), (0x0d4,  8), (0x0cf,  8), (0x0d6,  8),
    (0x0de,  8), (0x0e1,  8), (0x1d0,  9), (0x1d6,  9), (0x3d1, 10), (0x3d5, 10),
    (0x3f2, 10), (0x7ee, 11), (0x7fb, 11), (0x3e9, 10), (0x1cd,  9), (0x1c8,  9),
    (0x1cb,  9), (0x1d1,  9), (0x1d7,  9), (0x1df,  9), (0x3cf, 10), (0x3e0, 10),
    (0x3ef, 10), (0x7e6, 11), (0x7f8, 11), (0xffa, 12), (0x3eb, 10), (0x1dd,  9),
    (0x1d3,  9), (0x1d9,  9), (0x1db,  9), (0x3d2, 10), (0x3cc, 10), (0x3dc, 10),
    (0x3ea, 10), (0x7ed, 11), (0x7f3, 11), (0x7f9, 11), (0xff9, 12), (0x7f2, 11),
    (0x3ce, 10), (0x1e4,  9), (0x3cb, 10), (0x3d8, 10), (0x3d6, 10), (0x3e2, 10),
    (0x3e5, 10), (0x7e8, 11), (0x7f4, 11), (0x7f5, 11), (0x7f7, 11), (0xffb, 12),
    (0x7fa, 11), (0x3ec, 10), (0x3df, 10), (0x3e1, 10), (0x3e4, 10), (0x3e6, 10),
    (0x3f0, 10), (0x7e9, 11), (0x7ef, 11), (0xff8, 12), (0xffe, 12), (0xffc, 12),
    (0xfff, 12),
];

/// 频谱码本 11: pair, unsigned, LAV=16 (escape)
#[rustfmt::skip]
pub(crate) const SPECTRUM_CODES_11: [(u16, u8); 289] = [
    (0x000,  4), (0x006,  5), (0x019,  6), (0x03d,  7), (0x09c,  8), (0x0c6,  8),
    (0x1a7,  9), (0x390, 10), (0x3c2, 10), (0x3df, 10), (0x7e6, 11), (0x7f3, 11),
    (0xffb, 12), (0x7ec, 11), (0xffa, 12), (0xffe, 12), (0x38e, 10), (0x005,  5),
    (0x001,  4), (0x008,  5), (0x014,  6), (0x037,  7), (0x042,  7), (0x092,  8),
    (0x0af,  8), (0x191,  9), (0x1a5,  9), (0x1b5,  9), (0x39e, 10), (0x3c0, 10),
    (0x3a2, 10), (0x3cd, 10), (0x7d6, 11), (0x0ae,  8), (0x017,  6), (0x007,  5),
    (0x009,  5), (0x018,  6), (0x039,  7), (0x040,  7), (0x08e,  8), (0x0a3,  8),
    (0x0b8,  8), (0x199,  9), (0x1ac,  9), (0x1c1,  9), (0x3b1, 10), (0x396, 10),
    (0x3be, 10), (0x3ca, 10), (0x09d,  8), (0x03c,  7), (0x015,  6), (0x016,  6),
    (0x01a,  6), (0x03b,  7), (0x044,  7), (0x091,  8), (0x0a5,  8), (0x0be,  8),
    (0x196,  9), (0x1ae,  9), (0x1b9,  9), (0x3a1, 10), (0x391, 10), (0x3a5, 10),
    (0x3d5, 10), (0x094,  8), (0x09a,  8), (0x036,  7), (0x038,  7), (0x03a,  7),
    (0x041,  7), (0x08c,  8), (0x09b,  8), (0x0b0,  8), (0x0c3,  8), (0x19e,  9),
    (0x1ab,  9), (0x1bc,  9), (0x39f, 10), (0x38f, 10), (0x3a9, 10), (0x3cf, 10),
    (0x093,  8), (0x0bf,  8), (0x03e,  7), (0x03f,  7), (0x043,  7), (0x045,  7),
    (0x09e,  8), (0x0a7,  8), (0x0b9,  8), (0x194,  9), (0x1a2,  9), (0x1ba,  9),
    (0x1c3,  9), (0x3a6, 10), (0x3a7, 10), (0x3bb, 10), (0x3d4, 10), (0x09f,  8),
    (0x1a0,  9), (0x08f,  8), (0x08d,  8), (0x090,  8), (0x098,  8), (0x0a6,  8),
    (0x0b6,  8), (0x0c4,  8), (0x19f,  9), (0x1af,  9), (0x1bf,  9), (0x399, 10),
    (0x3bf, 10), (0x3b4, 10), (0x3c9, 10), (0x3e7, 10), (0x0a8,  8), (0x1b6,  9),
    (0x0ab,  8), (0x0a4,  8), (0x0aa,  8), (0x0b2,  8), (0x0c2,  8), (0x0c5,  8),
    (0x198,  9), (0x1a4,  9), (0x1b8,  9), (0x38c, 10), (0x3a4, 10), (0x3c4, 10),
    (0x3c6, 10), (0x3dd, 10), (0x3e8, 10), (0x0ad,  8), (0x3af, 10), (0x192,  9),
    (0x0bd,  8), (0x0bc,  8), (0x18e,  9), (0x197,  9), (0x19a,  9), (0x1a3,  9),
    (0x1b1,  9), (0x38d, 10), (0x398, 10), (0x3b7, 10), (0x3d3, 10), (0x3d1, 10),
    (0x3db, 10), (0x7dd, 11), (0x0b4,  8), (0x3de, 10), (0x1a9,  9), (0x19b,  9),
    (0x19c,  9), (0x1a1,  9), (0x1aa,  9), (0x1ad,  9), (0x1b3,  9), (0x38b, 10),
    (0x3b2, 10), (0x3b8, 10), (0x3ce, 10), (0x3e1, 10), (0x3e0, 10), (0x7d2, 11),
    (0x7e5, 11), (0x0b7,  8), (0x7e3, 11), (0x1bb,  9), (0x1a8,  9), (0x1a6,  9),
    (0x1b0,  9), (0x1b2,  9), (0x1b7,  9), (0x39b, 10), (0x39a, 10), (0x3ba, 10),
    (0x3b5, 10), (0x3d6, 10), (0x7d7, 11), (0x3e4, 10), (0x7d8, 11), (0x7ea, 11),
    (0x0ba,  8), (0x7e8, 11), (0x3a0, 10), (0x1bd,  9), (0x1b4,  9), (0x38a, 10),
    (0x1c4,  9), (0x392, 10), (0x3aa, 10), (0x3b0, 10), (0x3bc, 10), (0x3d7, 10),
    (0x7d4, 11), (0x7dc, 11), (0x7db, 11), (0x7d5, 11), (0x7f0, 11), (0x0c1,  8),
    (0x7fb, 11), (0x3c8, 10), (0x3a3, 10), (0x395, 10), (0x39d, 10), (0x3ac, 10),
    (0x3ae, 10), (0x3c5, 10), (0x3d8, 10), (0x3e2, 10), (0x3e6, 10), (0x7e4, 11),
    (0x7e7, 11), (0x7e0, 11), (0x7e9, 11), (0x7f7, 11), (0x190,  9), (0x7f2, 11),
    (0x393, 10), (0x1be,  9), (0x1c0,  9), (0x394, 10), (0x397, 10), (0x3ad, 10),
    (0x3c3, 10), (0x3c1, 10), (0x3d2, 10), (0x7da, 11), (0x7d9, 11), (0x7df, 11),
    (0x7eb, 11), (0x7f4, 11), (0x7fa, 11), (0x195,  9), (0x7f8, 11), (0x3bd, 10),
    (0x39c, 10), (0x3ab, 10), (0x3a8, 10), (0x3b3, 10), (0x3b9, 10), (0x3d0, 10),
    (0x3e3, 10), (0x3e5, 10), (0x7e2, 11), (0x7de, 11), (0x7ed, 11), (0x7f1, 11),
    (0x7f9, 11), (0x7fc, 11), (0x193,  9), (0xffd, 12), (0x3dc, 10), (0x3b6, 10),
    (0x3c7, 10), (0x3cc, 10), (0x3cb, 10), (0x3d9, 10), (0x3da, 10), (0x7d3, 11),
    (0x7e1, 11), (0x7ee, 11), (0x7ef, 11), (0x7f5, 11), (0x7f6, 11), (0xffc, 12),
    (0xfff, 12), (0x19d,  9), (0x1c2,  9), (0x0b5,  8), (0x0a1,  8), (0x096,  8),
    (0x097,  8), (0x095,  8), (0x099,  8), (0x0a0,  8), (0x0a2,  8), (0x0ac,  8),
    (0x0a9,  8), (0x0b1,  8), (0x0b3,  8), (0x0bb,  8), (0x0c0,  8), (0x18f,  9),
    (0x004,  5),
];
