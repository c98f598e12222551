//! Packed 8x8 CGA font, IBM PC code page 437.
//!
//! One byte per glyph row, most significant bit is the leftmost pixel.
//! Glyph order follows the code page, so the byte offset of glyph `g`
//! is `g * 8`.

/// 256 glyphs x 8 row bytes, 1 bit per pixel.
#[rustfmt::skip]
pub const FONT_8X8: [u8; 2048] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 00
    0x7E, 0x81, 0xA5, 0x81, 0xBD, 0x99, 0x81, 0x7E, // 01
    0x7E, 0xFF, 0xDB, 0xFF, 0xC3, 0xE7, 0xFF, 0x7E, // 02
    0x6C, 0xFE, 0xFE, 0xFE, 0x7C, 0x38, 0x10, 0x00, // 03
    0x10, 0x38, 0x7C, 0xFE, 0x7C, 0x38, 0x10, 0x00, // 04
    0x38, 0x7C, 0x38, 0xFE, 0xFE, 0xD6, 0x10, 0x38, // 05
    0x10, 0x10, 0x38, 0x7C, 0xFE, 0x7C, 0x10, 0x38, // 06
    0x00, 0x00, 0x18, 0x3C, 0x3C, 0x18, 0x00, 0x00, // 07
    0xFF, 0xFF, 0xE7, 0xC3, 0xC3, 0xE7, 0xFF, 0xFF, // 08
    0x00, 0x3C, 0x66, 0x42, 0x42, 0x66, 0x3C, 0x00, // 09
    0xFF, 0xC3, 0x99, 0xBD, 0xBD, 0x99, 0xC3, 0xFF, // 0a
    0x0F, 0x07, 0x0F, 0x7D, 0xCC, 0xCC, 0xCC, 0x78, // 0b
    0x3C, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x7E, 0x18, // 0c
    0x3F, 0x33, 0x3F, 0x30, 0x30, 0x70, 0xF0, 0xE0, // 0d
    0x7F, 0x63, 0x7F, 0x63, 0x63, 0x67, 0xE6, 0xC0, // 0e
    0x99, 0x5A, 0x3C, 0xE7, 0xE7, 0x3C, 0x5A, 0x99, // 0f
    0x80, 0xE0, 0xF8, 0xFE, 0xF8, 0xE0, 0x80, 0x00, // 10
    0x02, 0x0E, 0x3E, 0xFE, 0x3E, 0x0E, 0x02, 0x00, // 11
    0x18, 0x3C, 0x7E, 0x18, 0x18, 0x7E, 0x3C, 0x18, // 12
    0x66, 0x66, 0x66, 0x66, 0x66, 0x00, 0x66, 0x00, // 13
    0x7F, 0xDB, 0xDB, 0x7B, 0x1B, 0x1B, 0x1B, 0x00, // 14
    0x3E, 0x63, 0x38, 0x6C, 0x6C, 0x38, 0xCC, 0x78, // 15
    0x00, 0x00, 0x00, 0x00, 0x7E, 0x7E, 0x7E, 0x00, // 16
    0x18, 0x3C, 0x7E, 0x18, 0x7E, 0x3C, 0x18, 0xFF, // 17
    0x18, 0x3C, 0x7E, 0x18, 0x18, 0x18, 0x18, 0x00, // 18
    0x18, 0x18, 0x18, 0x18, 0x7E, 0x3C, 0x18, 0x00, // 19
    0x00, 0x18, 0x0C, 0xFE, 0x0C, 0x18, 0x00, 0x00, // 1a
    0x00, 0x30, 0x60, 0xFE, 0x60, 0x30, 0x00, 0x00, // 1b
    0x00, 0x00, 0xC0, 0xC0, 0xC0, 0xFE, 0x00, 0x00, // 1c
    0x00, 0x24, 0x66, 0xFF, 0x66, 0x24, 0x00, 0x00, // 1d
    0x00, 0x18, 0x3C, 0x7E, 0xFF, 0xFF, 0x00, 0x00, // 1e
    0x00, 0xFF, 0xFF, 0x7E, 0x3C, 0x18, 0x00, 0x00, // 1f
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 20
    0x30, 0x78, 0x78, 0x30, 0x30, 0x00, 0x30, 0x00, // 21
    0x6C, 0x6C, 0x6C, 0x00, 0x00, 0x00, 0x00, 0x00, // 22
    0x6C, 0x6C, 0xFE, 0x6C, 0xFE, 0x6C, 0x6C, 0x00, // 23
    0x30, 0x7C, 0xC0, 0x78, 0x0C, 0xF8, 0x30, 0x00, // 24
    0x00, 0xC6, 0xCC, 0x18, 0x30, 0x66, 0xC6, 0x00, // 25
    0x38, 0x6C, 0x38, 0x76, 0xDC, 0xCC, 0x76, 0x00, // 26
    0x60, 0x60, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, // 27
    0x18, 0x30, 0x60, 0x60, 0x60, 0x30, 0x18, 0x00, // 28
    0x60, 0x30, 0x18, 0x18, 0x18, 0x30, 0x60, 0x00, // 29
    0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00, // 2a
    0x00, 0x30, 0x30, 0xFC, 0x30, 0x30, 0x00, 0x00, // 2b
    0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x60, // 2c
    0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, // 2d
    0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x00, // 2e
    0x06, 0x0C, 0x18, 0x30, 0x60, 0xC0, 0x80, 0x00, // 2f
    0x7C, 0xC6, 0xCE, 0xDE, 0xF6, 0xE6, 0x7C, 0x00, // 30
    0x30, 0x70, 0x30, 0x30, 0x30, 0x30, 0xFC, 0x00, // 31
    0x78, 0xCC, 0x0C, 0x38, 0x60, 0xCC, 0xFC, 0x00, // 32
    0x78, 0xCC, 0x0C, 0x38, 0x0C, 0xCC, 0x78, 0x00, // 33
    0x1C, 0x3C, 0x6C, 0xCC, 0xFE, 0x0C, 0x1E, 0x00, // 34
    0xFC, 0xC0, 0xF8, 0x0C, 0x0C, 0xCC, 0x78, 0x00, // 35
    0x38, 0x60, 0xC0, 0xF8, 0xCC, 0xCC, 0x78, 0x00, // 36
    0xFC, 0xCC, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00, // 37
    0x78, 0xCC, 0xCC, 0x78, 0xCC, 0xCC, 0x78, 0x00, // 38
    0x78, 0xCC, 0xCC, 0x7C, 0x0C, 0x18, 0x70, 0x00, // 39
    0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x00, // 3a
    0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x60, // 3b
    0x18, 0x30, 0x60, 0xC0, 0x60, 0x30, 0x18, 0x00, // 3c
    0x00, 0x00, 0xFC, 0x00, 0x00, 0xFC, 0x00, 0x00, // 3d
    0x60, 0x30, 0x18, 0x0C, 0x18, 0x30, 0x60, 0x00, // 3e
    0x78, 0xCC, 0x0C, 0x18, 0x30, 0x00, 0x30, 0x00, // 3f
    0x7C, 0xC6, 0xDE, 0xDE, 0xDE, 0xC0, 0x78, 0x00, // 40
    0x30, 0x78, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0x00, // 41
    0xFC, 0x66, 0x66, 0x7C, 0x66, 0x66, 0xFC, 0x00, // 42
    0x3C, 0x66, 0xC0, 0xC0, 0xC0, 0x66, 0x3C, 0x00, // 43
    0xF8, 0x6C, 0x66, 0x66, 0x66, 0x6C, 0xF8, 0x00, // 44
    0xFE, 0x62, 0x68, 0x78, 0x68, 0x62, 0xFE, 0x00, // 45
    0xFE, 0x62, 0x68, 0x78, 0x68, 0x60, 0xF0, 0x00, // 46
    0x3C, 0x66, 0xC0, 0xC0, 0xCE, 0x66, 0x3E, 0x00, // 47
    0xCC, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0xCC, 0x00, // 48
    0x78, 0x30, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00, // 49
    0x1E, 0x0C, 0x0C, 0x0C, 0xCC, 0xCC, 0x78, 0x00, // 4a
    0xE6, 0x66, 0x6C, 0x78, 0x6C, 0x66, 0xE6, 0x00, // 4b
    0xF0, 0x60, 0x60, 0x60, 0x62, 0x66, 0xFE, 0x00, // 4c
    0xC6, 0xEE, 0xFE, 0xFE, 0xD6, 0xC6, 0xC6, 0x00, // 4d
    0xC6, 0xE6, 0xF6, 0xDE, 0xCE, 0xC6, 0xC6, 0x00, // 4e
    0x38, 0x6C, 0xC6, 0xC6, 0xC6, 0x6C, 0x38, 0x00, // 4f
    0xFC, 0x66, 0x66, 0x7C, 0x60, 0x60, 0xF0, 0x00, // 50
    0x78, 0xCC, 0xCC, 0xCC, 0xDC, 0x78, 0x1C, 0x00, // 51
    0xFC, 0x66, 0x66, 0x7C, 0x6C, 0x66, 0xE6, 0x00, // 52
    0x78, 0xCC, 0x60, 0x30, 0x18, 0xCC, 0x78, 0x00, // 53
    0xFC, 0xB4, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00, // 54
    0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xFC, 0x00, // 55
    0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x00, // 56
    0xC6, 0xC6, 0xC6, 0xD6, 0xFE, 0xEE, 0xC6, 0x00, // 57
    0xC6, 0xC6, 0x6C, 0x38, 0x38, 0x6C, 0xC6, 0x00, // 58
    0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x30, 0x78, 0x00, // 59
    0xFE, 0xC6, 0x8C, 0x18, 0x32, 0x66, 0xFE, 0x00, // 5a
    0x78, 0x60, 0x60, 0x60, 0x60, 0x60, 0x78, 0x00, // 5b
    0xC0, 0x60, 0x30, 0x18, 0x0C, 0x06, 0x02, 0x00, // 5c
    0x78, 0x18, 0x18, 0x18, 0x18, 0x18, 0x78, 0x00, // 5d
    0x10, 0x38, 0x6C, 0xC6, 0x00, 0x00, 0x00, 0x00, // 5e
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, // 5f
    0x30, 0x30, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, // 60
    0x00, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x76, 0x00, // 61
    0xE0, 0x60, 0x60, 0x7C, 0x66, 0x66, 0xDC, 0x00, // 62
    0x00, 0x00, 0x78, 0xCC, 0xC0, 0xCC, 0x78, 0x00, // 63
    0x1C, 0x0C, 0x0C, 0x7C, 0xCC, 0xCC, 0x76, 0x00, // 64
    0x00, 0x00, 0x78, 0xCC, 0xFC, 0xC0, 0x78, 0x00, // 65
    0x38, 0x6C, 0x60, 0xF0, 0x60, 0x60, 0xF0, 0x00, // 66
    0x00, 0x00, 0x76, 0xCC, 0xCC, 0x7C, 0x0C, 0xF8, // 67
    0xE0, 0x60, 0x6C, 0x76, 0x66, 0x66, 0xE6, 0x00, // 68
    0x30, 0x00, 0x70, 0x30, 0x30, 0x30, 0x78, 0x00, // 69
    0x0C, 0x00, 0x0C, 0x0C, 0x0C, 0xCC, 0xCC, 0x78, // 6a
    0xE0, 0x60, 0x66, 0x6C, 0x78, 0x6C, 0xE6, 0x00, // 6b
    0x70, 0x30, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00, // 6c
    0x00, 0x00, 0xCC, 0xFE, 0xFE, 0xD6, 0xC6, 0x00, // 6d
    0x00, 0x00, 0xF8, 0xCC, 0xCC, 0xCC, 0xCC, 0x00, // 6e
    0x00, 0x00, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // 6f
    0x00, 0x00, 0xDC, 0x66, 0x66, 0x7C, 0x60, 0xF0, // 70
    0x00, 0x00, 0x76, 0xCC, 0xCC, 0x7C, 0x0C, 0x1E, // 71
    0x00, 0x00, 0xDC, 0x76, 0x66, 0x60, 0xF0, 0x00, // 72
    0x00, 0x00, 0x7C, 0xC0, 0x78, 0x0C, 0xF8, 0x00, // 73
    0x10, 0x30, 0x7C, 0x30, 0x30, 0x34, 0x18, 0x00, // 74
    0x00, 0x00, 0xCC, 0xCC, 0xCC, 0xCC, 0x76, 0x00, // 75
    0x00, 0x00, 0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x00, // 76
    0x00, 0x00, 0xC6, 0xD6, 0xFE, 0xFE, 0x6C, 0x00, // 77
    0x00, 0x00, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0x00, // 78
    0x00, 0x00, 0xCC, 0xCC, 0xCC, 0x7C, 0x0C, 0xF8, // 79
    0x00, 0x00, 0xFC, 0x98, 0x30, 0x64, 0xFC, 0x00, // 7a
    0x1C, 0x30, 0x30, 0xE0, 0x30, 0x30, 0x1C, 0x00, // 7b
    0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00, // 7c
    0xE0, 0x30, 0x30, 0x1C, 0x30, 0x30, 0xE0, 0x00, // 7d
    0x76, 0xDC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 7e
    0x00, 0x10, 0x38, 0x6C, 0xC6, 0xC6, 0xFE, 0x00, // 7f
    0x78, 0xCC, 0xC0, 0xCC, 0x78, 0x18, 0x0C, 0x78, // 80
    0x00, 0xCC, 0x00, 0xCC, 0xCC, 0xCC, 0x7E, 0x00, // 81
    0x1C, 0x00, 0x78, 0xCC, 0xFC, 0xC0, 0x78, 0x00, // 82
    0x7E, 0xC3, 0x3C, 0x06, 0x3E, 0x66, 0x3F, 0x00, // 83
    0xCC, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x7E, 0x00, // 84
    0xE0, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x7E, 0x00, // 85
    0x30, 0x30, 0x78, 0x0C, 0x7C, 0xCC, 0x7E, 0x00, // 86
    0x00, 0x00, 0x78, 0xC0, 0xC0, 0x78, 0x0C, 0x38, // 87
    0x7E, 0xC3, 0x3C, 0x66, 0x7E, 0x60, 0x3C, 0x00, // 88
    0xCC, 0x00, 0x78, 0xCC, 0xFC, 0xC0, 0x78, 0x00, // 89
    0xE0, 0x00, 0x78, 0xCC, 0xFC, 0xC0, 0x78, 0x00, // 8a
    0xCC, 0x00, 0x70, 0x30, 0x30, 0x30, 0x78, 0x00, // 8b
    0x7C, 0xC6, 0x38, 0x18, 0x18, 0x18, 0x3C, 0x00, // 8c
    0xE0, 0x00, 0x70, 0x30, 0x30, 0x30, 0x78, 0x00, // 8d
    0xC6, 0x38, 0x6C, 0xC6, 0xFE, 0xC6, 0xC6, 0x00, // 8e
    0x30, 0x30, 0x00, 0x78, 0xCC, 0xFC, 0xCC, 0x00, // 8f
    0x1C, 0x00, 0xFC, 0x60, 0x78, 0x60, 0xFC, 0x00, // 90
    0x00, 0x00, 0x7F, 0x0C, 0x7F, 0xCC, 0x7F, 0x00, // 91
    0x3E, 0x6C, 0xCC, 0xFE, 0xCC, 0xCC, 0xCE, 0x00, // 92
    0x78, 0xCC, 0x00, 0x78, 0xCC, 0xCC, 0x78, 0x00, // 93
    0x00, 0xCC, 0x00, 0x78, 0xCC, 0xCC, 0x78, 0x00, // 94
    0x00, 0xE0, 0x00, 0x78, 0xCC, 0xCC, 0x78, 0x00, // 95
    0x78, 0xCC, 0x00, 0xCC, 0xCC, 0xCC, 0x7E, 0x00, // 96
    0x00, 0xE0, 0x00, 0xCC, 0xCC, 0xCC, 0x7E, 0x00, // 97
    0x00, 0xCC, 0x00, 0xCC, 0xCC, 0x7C, 0x0C, 0xF8, // 98
    0xC3, 0x18, 0x3C, 0x66, 0x66, 0x3C, 0x18, 0x00, // 99
    0xCC, 0x00, 0xCC, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // 9a
    0x18, 0x18, 0x7E, 0xC0, 0xC0, 0x7E, 0x18, 0x18, // 9b
    0x38, 0x6C, 0x64, 0xF0, 0x60, 0xE6, 0xFC, 0x00, // 9c
    0xCC, 0xCC, 0x78, 0xFC, 0x30, 0xFC, 0x30, 0x30, // 9d
    0xF8, 0xCC, 0xCC, 0xFA, 0xC6, 0xCF, 0xC6, 0xC7, // 9e
    0x0E, 0x1B, 0x18, 0x3C, 0x18, 0x18, 0xD8, 0x70, // 9f
    0x1C, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x7E, 0x00, // a0
    0x38, 0x00, 0x70, 0x30, 0x30, 0x30, 0x78, 0x00, // a1
    0x00, 0x1C, 0x00, 0x78, 0xCC, 0xCC, 0x78, 0x00, // a2
    0x00, 0x1C, 0x00, 0xCC, 0xCC, 0xCC, 0x7E, 0x00, // a3
    0x00, 0xF8, 0x00, 0xF8, 0xCC, 0xCC, 0xCC, 0x00, // a4
    0xFC, 0x00, 0xCC, 0xEC, 0xFC, 0xDC, 0xCC, 0x00, // a5
    0x3C, 0x6C, 0x6C, 0x3E, 0x00, 0x7E, 0x00, 0x00, // a6
    0x38, 0x6C, 0x6C, 0x38, 0x00, 0x7C, 0x00, 0x00, // a7
    0x30, 0x00, 0x30, 0x60, 0xC0, 0xCC, 0x78, 0x00, // a8
    0x00, 0x00, 0x00, 0xFC, 0xC0, 0xC0, 0x00, 0x00, // a9
    0x00, 0x00, 0x00, 0xFC, 0x0C, 0x0C, 0x00, 0x00, // aa
    0xC3, 0xC6, 0xCC, 0xDE, 0x33, 0x66, 0xCC, 0x0F, // ab
    0xC3, 0xC6, 0xCC, 0xDB, 0x37, 0x6F, 0xCF, 0x03, // ac
    0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x18, 0x00, // ad
    0x00, 0x33, 0x66, 0xCC, 0x66, 0x33, 0x00, 0x00, // ae
    0x00, 0xCC, 0x66, 0x33, 0x66, 0xCC, 0x00, 0x00, // af
    0x22, 0x88, 0x22, 0x88, 0x22, 0x88, 0x22, 0x88, // b0
    0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, // b1
    0xDB, 0x77, 0xDB, 0xEE, 0xDB, 0x77, 0xDB, 0xEE, // b2
    0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, // b3
    0x18, 0x18, 0x18, 0x18, 0xF8, 0x18, 0x18, 0x18, // b4
    0x18, 0x18, 0xF8, 0x18, 0xF8, 0x18, 0x18, 0x18, // b5
    0x36, 0x36, 0x36, 0x36, 0xF6, 0x36, 0x36, 0x36, // b6
    0x00, 0x00, 0x00, 0x00, 0xFE, 0x36, 0x36, 0x36, // b7
    0x00, 0x00, 0xF8, 0x18, 0xF8, 0x18, 0x18, 0x18, // b8
    0x36, 0x36, 0xF6, 0x06, 0xF6, 0x36, 0x36, 0x36, // b9
    0x36, 0x36, 0x36, 0x36, 0x36, 0x36, 0x36, 0x36, // ba
    0x00, 0x00, 0xFE, 0x06, 0xF6, 0x36, 0x36, 0x36, // bb
    0x36, 0x36, 0xF6, 0x06, 0xFE, 0x00, 0x00, 0x00, // bc
    0x36, 0x36, 0x36, 0x36, 0xFE, 0x00, 0x00, 0x00, // bd
    0x18, 0x18, 0xF8, 0x18, 0xF8, 0x00, 0x00, 0x00, // be
    0x00, 0x00, 0x00, 0x00, 0xF8, 0x18, 0x18, 0x18, // bf
    0x18, 0x18, 0x18, 0x18, 0x1F, 0x00, 0x00, 0x00, // c0
    0x18, 0x18, 0x18, 0x18, 0xFF, 0x00, 0x00, 0x00, // c1
    0x00, 0x00, 0x00, 0x00, 0xFF, 0x18, 0x18, 0x18, // c2
    0x18, 0x18, 0x18, 0x18, 0x1F, 0x18, 0x18, 0x18, // c3
    0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, // c4
    0x18, 0x18, 0x18, 0x18, 0xFF, 0x18, 0x18, 0x18, // c5
    0x18, 0x18, 0x1F, 0x18, 0x1F, 0x18, 0x18, 0x18, // c6
    0x36, 0x36, 0x36, 0x36, 0x37, 0x36, 0x36, 0x36, // c7
    0x36, 0x36, 0x37, 0x30, 0x3F, 0x00, 0x00, 0x00, // c8
    0x00, 0x00, 0x3F, 0x30, 0x37, 0x36, 0x36, 0x36, // c9
    0x36, 0x36, 0xF7, 0x00, 0xFF, 0x00, 0x00, 0x00, // ca
    0x00, 0x00, 0xFF, 0x00, 0xF7, 0x36, 0x36, 0x36, // cb
    0x36, 0x36, 0x37, 0x30, 0x37, 0x36, 0x36, 0x36, // cc
    0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00, // cd
    0x36, 0x36, 0xF7, 0x00, 0xF7, 0x36, 0x36, 0x36, // ce
    0x18, 0x18, 0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00, // cf
    0x36, 0x36, 0x36, 0x36, 0xFF, 0x00, 0x00, 0x00, // d0
    0x00, 0x00, 0xFF, 0x00, 0xFF, 0x18, 0x18, 0x18, // d1
    0x00, 0x00, 0x00, 0x00, 0xFF, 0x36, 0x36, 0x36, // d2
    0x36, 0x36, 0x36, 0x36, 0x3F, 0x00, 0x00, 0x00, // d3
    0x18, 0x18, 0x1F, 0x18, 0x1F, 0x00, 0x00, 0x00, // d4
    0x00, 0x00, 0x1F, 0x18, 0x1F, 0x18, 0x18, 0x18, // d5
    0x00, 0x00, 0x00, 0x00, 0x3F, 0x36, 0x36, 0x36, // d6
    0x36, 0x36, 0x36, 0x36, 0xFF, 0x36, 0x36, 0x36, // d7
    0x18, 0x18, 0xFF, 0x18, 0xFF, 0x18, 0x18, 0x18, // d8
    0x18, 0x18, 0x18, 0x18, 0xF8, 0x00, 0x00, 0x00, // d9
    0x00, 0x00, 0x00, 0x00, 0x1F, 0x18, 0x18, 0x18, // da
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // db
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, // dc
    0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // dd
    0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, // de
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, // df
    0x00, 0x00, 0x76, 0xDC, 0xC8, 0xDC, 0x76, 0x00, // e0
    0x00, 0x78, 0xCC, 0xF8, 0xCC, 0xF8, 0xC0, 0xC0, // e1
    0x00, 0xFC, 0xCC, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, // e2
    0x00, 0xFE, 0x6C, 0x6C, 0x6C, 0x6C, 0x6C, 0x00, // e3
    0xFC, 0xCC, 0x60, 0x30, 0x60, 0xCC, 0xFC, 0x00, // e4
    0x00, 0x00, 0x7E, 0xD8, 0xD8, 0xD8, 0x70, 0x00, // e5
    0x00, 0x66, 0x66, 0x66, 0x66, 0x7C, 0x60, 0xC0, // e6
    0x00, 0x76, 0xDC, 0x18, 0x18, 0x18, 0x18, 0x00, // e7
    0xFC, 0x30, 0x78, 0xCC, 0xCC, 0x78, 0x30, 0xFC, // e8
    0x38, 0x6C, 0xC6, 0xFE, 0xC6, 0x6C, 0x38, 0x00, // e9
    0x38, 0x6C, 0xC6, 0xC6, 0x6C, 0x6C, 0xEE, 0x00, // ea
    0x1C, 0x30, 0x18, 0x7C, 0xCC, 0xCC, 0x78, 0x00, // eb
    0x00, 0x00, 0x7E, 0xDB, 0xDB, 0x7E, 0x00, 0x00, // ec
    0x06, 0x0C, 0x7E, 0xDB, 0xDB, 0x7E, 0x60, 0xC0, // ed
    0x38, 0x60, 0xC0, 0xF8, 0xC0, 0x60, 0x38, 0x00, // ee
    0x78, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0x00, // ef
    0x00, 0xFC, 0x00, 0xFC, 0x00, 0xFC, 0x00, 0x00, // f0
    0x30, 0x30, 0xFC, 0x30, 0x30, 0x00, 0xFC, 0x00, // f1
    0x60, 0x30, 0x18, 0x30, 0x60, 0x00, 0xFC, 0x00, // f2
    0x18, 0x30, 0x60, 0x30, 0x18, 0x00, 0xFC, 0x00, // f3
    0x0E, 0x1B, 0x1B, 0x18, 0x18, 0x18, 0x18, 0x18, // f4
    0x18, 0x18, 0x18, 0x18, 0x18, 0xD8, 0xD8, 0x70, // f5
    0x30, 0x30, 0x00, 0xFC, 0x00, 0x30, 0x30, 0x00, // f6
    0x00, 0x76, 0xDC, 0x00, 0x76, 0xDC, 0x00, 0x00, // f7
    0x38, 0x6C, 0x6C, 0x38, 0x00, 0x00, 0x00, 0x00, // f8
    0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, // f9
    0x00, 0x00, 0x00, 0x00, 0x18, 0x00, 0x00, 0x00, // fa
    0x0F, 0x0C, 0x0C, 0x0C, 0xEC, 0x6C, 0x3C, 0x1C, // fb
    0x78, 0x6C, 0x6C, 0x6C, 0x6C, 0x00, 0x00, 0x00, // fc
    0x70, 0x18, 0x30, 0x60, 0x78, 0x00, 0x00, 0x00, // fd
    0x00, 0x00, 0x3C, 0x3C, 0x3C, 0x3C, 0x00, 0x00, // fe
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ff
];
