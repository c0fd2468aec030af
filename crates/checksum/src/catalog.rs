//! Named catalogue of standard CRC parameter sets.
//!
//! Parameters come from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/)
//! (names lowercased, separated by hyphens only). Many protocols published
//! the same algorithm under different names, so a separate alias table maps
//! every accepted spelling onto one canonical template; aliases of the same
//! algorithm compare equal parameter-for-parameter and therefore share
//! lookup tables.
//!
//! Both tables are kept in increasing ASCII order and searched with plain
//! binary search. `str` ordering compares bytes, so a name that is a strict
//! prefix of a catalogue entry (`"crc-16"` vs `"crc-16-arc"`) sorts before it
//! and can never false-match.

use crate::params::CrcParams;

/// Template applied when a caller specifies nothing at all.
pub const DEFAULT_NAME: &str = "crc-32";

/// Parameters behind [`DEFAULT_NAME`]: CRC-32/ISO-HDLC.
pub(crate) const DEFAULT_TEMPLATE: CrcParams =
  t(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);

const fn t(width: u8, poly: u64, init: u64, refin: bool, refout: bool, xorout: u64) -> CrcParams {
  CrcParams { width, poly, init, refin, refout, xorout }
}

/// Canonical templates, ASCII-sorted by name.
#[rustfmt::skip]
static TEMPLATES: &[(&str, CrcParams)] = &[
  ("crc-10-atm",               t(10, 0x233, 0x000, false, false, 0x000)),
  ("crc-10-cdma2000",          t(10, 0x3D9, 0x3FF, false, false, 0x000)),
  ("crc-10-gsm",               t(10, 0x175, 0x000, false, false, 0x3FF)),
  ("crc-11-flexray",           t(11, 0x385, 0x01A, false, false, 0x000)),
  ("crc-11-umts",              t(11, 0x307, 0x000, false, false, 0x000)),
  ("crc-12-cdma2000",          t(12, 0xF13, 0xFFF, false, false, 0x000)),
  ("crc-12-dect",              t(12, 0x80F, 0x000, false, false, 0x000)),
  ("crc-12-gsm",               t(12, 0xD31, 0x000, false, false, 0xFFF)),
  ("crc-12-umts",              t(12, 0x80F, 0x000, false, true,  0x000)),
  ("crc-13-bbc",               t(13, 0x1CF5, 0x0000, false, false, 0x0000)),
  ("crc-14-darc",              t(14, 0x0805, 0x0000, true,  true,  0x0000)),
  ("crc-14-gsm",               t(14, 0x202D, 0x0000, false, false, 0x3FFF)),
  ("crc-15-can",               t(15, 0x4599, 0x0000, false, false, 0x0000)),
  ("crc-15-mpt1327",           t(15, 0x6815, 0x0000, false, false, 0x0001)),
  ("crc-16-arc",               t(16, 0x8005, 0x0000, true,  true,  0x0000)),
  ("crc-16-cdma2000",          t(16, 0xC867, 0xFFFF, false, false, 0x0000)),
  ("crc-16-cms",               t(16, 0x8005, 0xFFFF, false, false, 0x0000)),
  ("crc-16-dds-110",           t(16, 0x8005, 0x800D, false, false, 0x0000)),
  ("crc-16-dect-r",            t(16, 0x0589, 0x0000, false, false, 0x0001)),
  ("crc-16-dect-x",            t(16, 0x0589, 0x0000, false, false, 0x0000)),
  ("crc-16-dnp",               t(16, 0x3D65, 0x0000, true,  true,  0xFFFF)),
  ("crc-16-en-13757",          t(16, 0x3D65, 0x0000, false, false, 0xFFFF)),
  ("crc-16-genibus",           t(16, 0x1021, 0xFFFF, false, false, 0xFFFF)),
  ("crc-16-gsm",               t(16, 0x1021, 0x0000, false, false, 0xFFFF)),
  ("crc-16-ibm-3740",          t(16, 0x1021, 0xFFFF, false, false, 0x0000)),
  ("crc-16-ibm-sdlc",          t(16, 0x1021, 0xFFFF, true,  true,  0xFFFF)),
  ("crc-16-iso-iec-14443-3-a", t(16, 0x1021, 0xC6C6, true,  true,  0x0000)),
  ("crc-16-kermit",            t(16, 0x1021, 0x0000, true,  true,  0x0000)),
  ("crc-16-lj1200",            t(16, 0x6F63, 0x0000, false, false, 0x0000)),
  ("crc-16-m17",               t(16, 0x5935, 0xFFFF, false, false, 0x0000)),
  ("crc-16-maxim-dow",         t(16, 0x8005, 0x0000, true,  true,  0xFFFF)),
  ("crc-16-mcrf4xx",           t(16, 0x1021, 0xFFFF, true,  true,  0x0000)),
  ("crc-16-modbus",            t(16, 0x8005, 0xFFFF, true,  true,  0x0000)),
  ("crc-16-nrsc-5",            t(16, 0x080B, 0xFFFF, true,  true,  0x0000)),
  ("crc-16-opensafety-a",      t(16, 0x5935, 0x0000, false, false, 0x0000)),
  ("crc-16-opensafety-b",      t(16, 0x755B, 0x0000, false, false, 0x0000)),
  ("crc-16-profibus",          t(16, 0x1DCF, 0xFFFF, false, false, 0xFFFF)),
  ("crc-16-riello",            t(16, 0x1021, 0xB2AA, true,  true,  0x0000)),
  ("crc-16-spi-fujitsu",       t(16, 0x1021, 0x1D0F, false, false, 0x0000)),
  ("crc-16-t10-dif",           t(16, 0x8BB7, 0x0000, false, false, 0x0000)),
  ("crc-16-teledisk",          t(16, 0xA097, 0x0000, false, false, 0x0000)),
  ("crc-16-tms37157",          t(16, 0x1021, 0x89EC, true,  true,  0x0000)),
  ("crc-16-umts",              t(16, 0x8005, 0x0000, false, false, 0x0000)),
  ("crc-16-usb",               t(16, 0x8005, 0xFFFF, true,  true,  0xFFFF)),
  ("crc-16-xmodem",            t(16, 0x1021, 0x0000, false, false, 0x0000)),
  ("crc-17-can-fd",            t(17, 0x1_685B, 0x0_0000, false, false, 0x0_0000)),
  ("crc-21-can-fd",            t(21, 0x10_2899, 0x00_0000, false, false, 0x00_0000)),
  ("crc-24-ble",               t(24, 0x00_065B, 0x55_5555, true,  true,  0x00_0000)),
  ("crc-24-flexray-a",         t(24, 0x5D_6DCB, 0xFE_DCBA, false, false, 0x00_0000)),
  ("crc-24-flexray-b",         t(24, 0x5D_6DCB, 0xAB_CDEF, false, false, 0x00_0000)),
  ("crc-24-interlaken",        t(24, 0x32_8B63, 0xFF_FFFF, false, false, 0xFF_FFFF)),
  ("crc-24-lte-a",             t(24, 0x86_4CFB, 0x00_0000, false, false, 0x00_0000)),
  ("crc-24-lte-b",             t(24, 0x80_0063, 0x00_0000, false, false, 0x00_0000)),
  ("crc-24-openpgp",           t(24, 0x86_4CFB, 0xB7_04CE, false, false, 0x00_0000)),
  ("crc-24-os-9",              t(24, 0x80_0063, 0xFF_FFFF, false, false, 0xFF_FFFF)),
  ("crc-3-gsm",                t(3, 0x3, 0x0, false, false, 0x7)),
  ("crc-3-rohc",               t(3, 0x3, 0x7, true,  true,  0x0)),
  ("crc-30-cdma",              t(30, 0x2030_B9C7, 0x3FFF_FFFF, false, false, 0x3FFF_FFFF)),
  ("crc-31-philips",           t(31, 0x04C1_1DB7, 0x7FFF_FFFF, false, false, 0x7FFF_FFFF)),
  ("crc-32-aixm",              t(32, 0x8141_41AB, 0x0000_0000, false, false, 0x0000_0000)),
  ("crc-32-autosar",           t(32, 0xF4AC_FB13, 0xFFFF_FFFF, true,  true,  0xFFFF_FFFF)),
  ("crc-32-base91-d",          t(32, 0xA833_982B, 0xFFFF_FFFF, true,  true,  0xFFFF_FFFF)),
  ("crc-32-bzip2",             t(32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF)),
  ("crc-32-cd-rom-edc",        t(32, 0x8001_801B, 0x0000_0000, true,  true,  0x0000_0000)),
  ("crc-32-cksum",             t(32, 0x04C1_1DB7, 0x0000_0000, false, false, 0xFFFF_FFFF)),
  ("crc-32-iscsi",             t(32, 0x1EDC_6F41, 0xFFFF_FFFF, true,  true,  0xFFFF_FFFF)),
  ("crc-32-iso-hdlc",          DEFAULT_TEMPLATE),
  ("crc-32-jamcrc",            t(32, 0x04C1_1DB7, 0xFFFF_FFFF, true,  true,  0x0000_0000)),
  ("crc-32-mef",               t(32, 0x741B_8CD7, 0xFFFF_FFFF, true,  true,  0x0000_0000)),
  ("crc-32-mpeg-2",            t(32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0x0000_0000)),
  ("crc-32-xfer",              t(32, 0x0000_00AF, 0x0000_0000, false, false, 0x0000_0000)),
  ("crc-4-g-704",              t(4, 0x3, 0x0, true,  true,  0x0)),
  ("crc-4-interlaken",         t(4, 0x3, 0xF, false, false, 0xF)),
  ("crc-40-gsm",               t(40, 0x0482_0009, 0x00_0000_0000, false, false, 0xFF_FFFF_FFFF)),
  ("crc-5-epc-c1g2",           t(5, 0x09, 0x09, false, false, 0x00)),
  ("crc-5-g-704",              t(5, 0x15, 0x00, true,  true,  0x00)),
  ("crc-5-usb",                t(5, 0x05, 0x1F, true,  true,  0x1F)),
  ("crc-6-cdma2000-a",         t(6, 0x27, 0x3F, false, false, 0x00)),
  ("crc-6-cdma2000-b",         t(6, 0x07, 0x3F, false, false, 0x00)),
  ("crc-6-darc",               t(6, 0x19, 0x00, true,  true,  0x00)),
  ("crc-6-g-704",              t(6, 0x03, 0x00, true,  true,  0x00)),
  ("crc-6-gsm",                t(6, 0x2F, 0x00, false, false, 0x3F)),
  ("crc-64-ecma-182",          t(64, 0x42F0_E1EB_A9EA_3693, 0x0000_0000_0000_0000, false, false, 0x0000_0000_0000_0000)),
  ("crc-64-go-iso",            t(64, 0x0000_0000_0000_001B, 0xFFFF_FFFF_FFFF_FFFF, true,  true,  0xFFFF_FFFF_FFFF_FFFF)),
  ("crc-64-ms",                t(64, 0x259C_84CB_A642_6349, 0xFFFF_FFFF_FFFF_FFFF, true,  true,  0x0000_0000_0000_0000)),
  ("crc-64-nvme",              t(64, 0xAD93_D235_94C9_3659, 0xFFFF_FFFF_FFFF_FFFF, true,  true,  0xFFFF_FFFF_FFFF_FFFF)),
  ("crc-64-redis",             t(64, 0xAD93_D235_94C9_35A9, 0x0000_0000_0000_0000, true,  true,  0x0000_0000_0000_0000)),
  ("crc-64-we",                t(64, 0x42F0_E1EB_A9EA_3693, 0xFFFF_FFFF_FFFF_FFFF, false, false, 0xFFFF_FFFF_FFFF_FFFF)),
  ("crc-64-xz",                t(64, 0x42F0_E1EB_A9EA_3693, 0xFFFF_FFFF_FFFF_FFFF, true,  true,  0xFFFF_FFFF_FFFF_FFFF)),
  ("crc-7-mmc",                t(7, 0x09, 0x00, false, false, 0x00)),
  ("crc-7-rohc",               t(7, 0x4F, 0x7F, true,  true,  0x00)),
  ("crc-7-umts",               t(7, 0x45, 0x00, false, false, 0x00)),
  ("crc-8-autosar",            t(8, 0x2F, 0xFF, false, false, 0xFF)),
  ("crc-8-bluetooth",          t(8, 0xA7, 0x00, true,  true,  0x00)),
  ("crc-8-cdma2000",           t(8, 0x9B, 0xFF, false, false, 0x00)),
  ("crc-8-darc",               t(8, 0x39, 0x00, true,  true,  0x00)),
  ("crc-8-dvb-s2",             t(8, 0xD5, 0x00, false, false, 0x00)),
  ("crc-8-gsm-a",              t(8, 0x1D, 0x00, false, false, 0x00)),
  ("crc-8-gsm-b",              t(8, 0x49, 0x00, false, false, 0xFF)),
  ("crc-8-hitag",              t(8, 0x1D, 0xFF, false, false, 0x00)),
  ("crc-8-i-432-1",            t(8, 0x07, 0x00, false, false, 0x55)),
  ("crc-8-i-code",             t(8, 0x1D, 0xFD, false, false, 0x00)),
  ("crc-8-lte",                t(8, 0x9B, 0x00, false, false, 0x00)),
  ("crc-8-maxim-dow",          t(8, 0x31, 0x00, true,  true,  0x00)),
  ("crc-8-mifare-mad",         t(8, 0x1D, 0xC7, false, false, 0x00)),
  ("crc-8-nrsc-5",             t(8, 0x31, 0xFF, false, false, 0x00)),
  ("crc-8-opensafety",         t(8, 0x2F, 0x00, false, false, 0x00)),
  ("crc-8-rohc",               t(8, 0x07, 0xFF, true,  true,  0x00)),
  ("crc-8-sae-j1850",          t(8, 0x1D, 0xFF, false, false, 0xFF)),
  ("crc-8-smbus",              t(8, 0x07, 0x00, false, false, 0x00)),
  ("crc-8-tech-3250",          t(8, 0x1D, 0xFF, true,  true,  0x00)),
  ("crc-8-wcdma",              t(8, 0x9B, 0x00, true,  true,  0x00)),
];

/// Every accepted name, ASCII-sorted, mapped onto its canonical template.
#[rustfmt::skip]
static ALIASES: &[(&str, &str)] = &[
  ("arc",                      "crc-16-arc"),
  ("b-crc-32",                 "crc-32-bzip2"),
  ("cksum",                    "crc-32-cksum"),
  ("crc-10",                   "crc-10-atm"),
  ("crc-10-atm",               "crc-10-atm"),
  ("crc-10-cdma2000",          "crc-10-cdma2000"),
  ("crc-10-gsm",               "crc-10-gsm"),
  ("crc-10-i-610",             "crc-10-atm"),
  ("crc-11",                   "crc-11-flexray"),
  ("crc-11-flexray",           "crc-11-flexray"),
  ("crc-11-umts",              "crc-11-umts"),
  ("crc-12-3gpp",              "crc-12-umts"),
  ("crc-12-cdma2000",          "crc-12-cdma2000"),
  ("crc-12-dect",              "crc-12-dect"),
  ("crc-12-gsm",               "crc-12-gsm"),
  ("crc-12-umts",              "crc-12-umts"),
  ("crc-13-bbc",               "crc-13-bbc"),
  ("crc-14-darc",              "crc-14-darc"),
  ("crc-14-gsm",               "crc-14-gsm"),
  ("crc-15",                   "crc-15-can"),
  ("crc-15-can",               "crc-15-can"),
  ("crc-15-mpt1327",           "crc-15-mpt1327"),
  ("crc-16",                   "crc-16-arc"),
  ("crc-16-acorn",             "crc-16-xmodem"),
  ("crc-16-arc",               "crc-16-arc"),
  ("crc-16-aug-ccitt",         "crc-16-spi-fujitsu"),
  ("crc-16-autosar",           "crc-16-ibm-3740"),
  ("crc-16-bluetooth",         "crc-16-kermit"),
  ("crc-16-buypass",           "crc-16-umts"),
  ("crc-16-ccitt",             "crc-16-kermit"),
  ("crc-16-ccitt-false",       "crc-16-ibm-3740"),
  ("crc-16-ccitt-true",        "crc-16-kermit"),
  ("crc-16-cdma2000",          "crc-16-cdma2000"),
  ("crc-16-cms",               "crc-16-cms"),
  ("crc-16-darc",              "crc-16-genibus"),
  ("crc-16-dds-110",           "crc-16-dds-110"),
  ("crc-16-dect-r",            "crc-16-dect-r"),
  ("crc-16-dect-x",            "crc-16-dect-x"),
  ("crc-16-dnp",               "crc-16-dnp"),
  ("crc-16-en-13757",          "crc-16-en-13757"),
  ("crc-16-epc",               "crc-16-genibus"),
  ("crc-16-epc-c1g2",          "crc-16-genibus"),
  ("crc-16-genibus",           "crc-16-genibus"),
  ("crc-16-gsm",               "crc-16-gsm"),
  ("crc-16-i-code",            "crc-16-genibus"),
  ("crc-16-ibm-3740",          "crc-16-ibm-3740"),
  ("crc-16-ibm-sdlc",          "crc-16-ibm-sdlc"),
  ("crc-16-iec-61158-2",       "crc-16-profibus"),
  ("crc-16-iso-hdlc",          "crc-16-ibm-sdlc"),
  ("crc-16-iso-iec-14443-3-a", "crc-16-iso-iec-14443-3-a"),
  ("crc-16-iso-iec-14443-3-b", "crc-16-ibm-sdlc"),
  ("crc-16-kermit",            "crc-16-kermit"),
  ("crc-16-lha",               "crc-16-arc"),
  ("crc-16-lj1200",            "crc-16-lj1200"),
  ("crc-16-lte",               "crc-16-xmodem"),
  ("crc-16-m17",               "crc-16-m17"),
  ("crc-16-maxim",             "crc-16-maxim-dow"),
  ("crc-16-maxim-dow",         "crc-16-maxim-dow"),
  ("crc-16-mcrf4xx",           "crc-16-mcrf4xx"),
  ("crc-16-modbus",            "crc-16-modbus"),
  ("crc-16-nrsc-5",            "crc-16-nrsc-5"),
  ("crc-16-opensafety-a",      "crc-16-opensafety-a"),
  ("crc-16-opensafety-b",      "crc-16-opensafety-b"),
  ("crc-16-profibus",          "crc-16-profibus"),
  ("crc-16-riello",            "crc-16-riello"),
  ("crc-16-spi-fujitsu",       "crc-16-spi-fujitsu"),
  ("crc-16-t10-dif",           "crc-16-t10-dif"),
  ("crc-16-teledisk",          "crc-16-teledisk"),
  ("crc-16-tms37157",          "crc-16-tms37157"),
  ("crc-16-umts",              "crc-16-umts"),
  ("crc-16-usb",               "crc-16-usb"),
  ("crc-16-v-41-lsb",          "crc-16-kermit"),
  ("crc-16-v-41-msb",          "crc-16-xmodem"),
  ("crc-16-verifone",          "crc-16-umts"),
  ("crc-16-x-25",              "crc-16-ibm-sdlc"),
  ("crc-16-xmodem",            "crc-16-xmodem"),
  ("crc-17-can-fd",            "crc-17-can-fd"),
  ("crc-21-can-fd",            "crc-21-can-fd"),
  ("crc-24",                   "crc-24-openpgp"),
  ("crc-24-ble",               "crc-24-ble"),
  ("crc-24-flexray-a",         "crc-24-flexray-a"),
  ("crc-24-flexray-b",         "crc-24-flexray-b"),
  ("crc-24-interlaken",        "crc-24-interlaken"),
  ("crc-24-lte-a",             "crc-24-lte-a"),
  ("crc-24-lte-b",             "crc-24-lte-b"),
  ("crc-24-openpgp",           "crc-24-openpgp"),
  ("crc-24-os-9",              "crc-24-os-9"),
  ("crc-3-gsm",                "crc-3-gsm"),
  ("crc-3-rohc",               "crc-3-rohc"),
  ("crc-30-cdma",              "crc-30-cdma"),
  ("crc-31-philips",           "crc-31-philips"),
  ("crc-32",                   "crc-32-iso-hdlc"),
  ("crc-32-aal5",              "crc-32-bzip2"),
  ("crc-32-adccp",             "crc-32-iso-hdlc"),
  ("crc-32-aixm",              "crc-32-aixm"),
  ("crc-32-autosar",           "crc-32-autosar"),
  ("crc-32-base91-c",          "crc-32-iscsi"),
  ("crc-32-base91-d",          "crc-32-base91-d"),
  ("crc-32-bzip2",             "crc-32-bzip2"),
  ("crc-32-castagnoli",        "crc-32-iscsi"),
  ("crc-32-cd-rom-edc",        "crc-32-cd-rom-edc"),
  ("crc-32-cksum",             "crc-32-cksum"),
  ("crc-32-dect-b",            "crc-32-bzip2"),
  ("crc-32-interlaken",        "crc-32-iscsi"),
  ("crc-32-iscsi",             "crc-32-iscsi"),
  ("crc-32-iso-hdlc",          "crc-32-iso-hdlc"),
  ("crc-32-jamcrc",            "crc-32-jamcrc"),
  ("crc-32-mef",               "crc-32-mef"),
  ("crc-32-mpeg-2",            "crc-32-mpeg-2"),
  ("crc-32-nvme",              "crc-32-iscsi"),
  ("crc-32-posix",             "crc-32-cksum"),
  ("crc-32-v-42",              "crc-32-iso-hdlc"),
  ("crc-32-xfer",              "crc-32-xfer"),
  ("crc-32-xz",                "crc-32-iso-hdlc"),
  ("crc-32c",                  "crc-32-iscsi"),
  ("crc-32d",                  "crc-32-base91-d"),
  ("crc-32q",                  "crc-32-aixm"),
  ("crc-4-g-704",              "crc-4-g-704"),
  ("crc-4-interlaken",         "crc-4-interlaken"),
  ("crc-4-itu",                "crc-4-g-704"),
  ("crc-40-gsm",               "crc-40-gsm"),
  ("crc-5-epc",                "crc-5-epc-c1g2"),
  ("crc-5-epc-c1g2",           "crc-5-epc-c1g2"),
  ("crc-5-g-704",              "crc-5-g-704"),
  ("crc-5-itu",                "crc-5-g-704"),
  ("crc-5-usb",                "crc-5-usb"),
  ("crc-6-cdma2000-a",         "crc-6-cdma2000-a"),
  ("crc-6-cdma2000-b",         "crc-6-cdma2000-b"),
  ("crc-6-darc",               "crc-6-darc"),
  ("crc-6-g-704",              "crc-6-g-704"),
  ("crc-6-gsm",                "crc-6-gsm"),
  ("crc-6-itu",                "crc-6-g-704"),
  ("crc-64",                   "crc-64-ecma-182"),
  ("crc-64-ecma-182",          "crc-64-ecma-182"),
  ("crc-64-go-ecma",           "crc-64-xz"),
  ("crc-64-go-iso",            "crc-64-go-iso"),
  ("crc-64-ms",                "crc-64-ms"),
  ("crc-64-nvme",              "crc-64-nvme"),
  ("crc-64-redis",             "crc-64-redis"),
  ("crc-64-we",                "crc-64-we"),
  ("crc-64-xz",                "crc-64-xz"),
  ("crc-7",                    "crc-7-mmc"),
  ("crc-7-mmc",                "crc-7-mmc"),
  ("crc-7-rohc",               "crc-7-rohc"),
  ("crc-7-umts",               "crc-7-umts"),
  ("crc-8",                    "crc-8-smbus"),
  ("crc-8-aes",                "crc-8-tech-3250"),
  ("crc-8-autosar",            "crc-8-autosar"),
  ("crc-8-bluetooth",          "crc-8-bluetooth"),
  ("crc-8-cdma2000",           "crc-8-cdma2000"),
  ("crc-8-darc",               "crc-8-darc"),
  ("crc-8-dvb-s2",             "crc-8-dvb-s2"),
  ("crc-8-ebu",                "crc-8-tech-3250"),
  ("crc-8-gsm-a",              "crc-8-gsm-a"),
  ("crc-8-gsm-b",              "crc-8-gsm-b"),
  ("crc-8-hitag",              "crc-8-hitag"),
  ("crc-8-i-432-1",            "crc-8-i-432-1"),
  ("crc-8-i-code",             "crc-8-i-code"),
  ("crc-8-itu",                "crc-8-i-432-1"),
  ("crc-8-lte",                "crc-8-lte"),
  ("crc-8-maxim",              "crc-8-maxim-dow"),
  ("crc-8-maxim-dow",          "crc-8-maxim-dow"),
  ("crc-8-mifare-mad",         "crc-8-mifare-mad"),
  ("crc-8-nrsc-5",             "crc-8-nrsc-5"),
  ("crc-8-opensafety",         "crc-8-opensafety"),
  ("crc-8-rohc",               "crc-8-rohc"),
  ("crc-8-sae-j1850",          "crc-8-sae-j1850"),
  ("crc-8-smbus",              "crc-8-smbus"),
  ("crc-8-tech-3250",          "crc-8-tech-3250"),
  ("crc-8-wcdma",              "crc-8-wcdma"),
  ("crc-a",                    "crc-16-iso-iec-14443-3-a"),
  ("crc-b",                    "crc-16-ibm-sdlc"),
  ("crc-ccitt",                "crc-16-kermit"),
  ("crc-ibm",                  "crc-16-arc"),
  ("dow-crc",                  "crc-8-maxim-dow"),
  ("jamcrc",                   "crc-32-jamcrc"),
  ("kermit",                   "crc-16-kermit"),
  ("modbus",                   "crc-16-modbus"),
  ("pkzip",                    "crc-32-iso-hdlc"),
  ("r-crc-16",                 "crc-16-dect-r"),
  ("x-25",                     "crc-16-ibm-sdlc"),
  ("x-crc-12",                 "crc-12-dect"),
  ("x-crc-16",                 "crc-16-dect-x"),
  ("xfer",                     "crc-32-xfer"),
  ("xmodem",                   "crc-16-xmodem"),
  ("zmodem",                   "crc-16-xmodem"),
];

fn find_canonical(name: &str) -> Option<CrcParams> {
  let index = TEMPLATES.binary_search_by(|probe| probe.0.cmp(name)).ok()?;
  TEMPLATES.get(index).map(|entry| entry.1)
}

/// Look up any catalogue name (canonical or alias).
#[must_use]
pub fn find(name: &str) -> Option<CrcParams> {
  let index = ALIASES.binary_search_by(|probe| probe.0.cmp(name)).ok()?;
  ALIASES.get(index).and_then(|entry| find_canonical(entry.1))
}

/// Iterate over every accepted name with its parameters.
///
/// Aliases appear individually; names mapping onto the same algorithm yield
/// equal parameter sets.
pub fn templates() -> impl Iterator<Item = (&'static str, CrcParams)> {
  ALIASES.iter().filter_map(|&(alias, canonical)| find_canonical(canonical).map(|params| (alias, params)))
}

/// Iterate over the distinct canonical templates only.
pub fn canonical() -> impl Iterator<Item = (&'static str, CrcParams)> {
  TEMPLATES.iter().copied()
}
