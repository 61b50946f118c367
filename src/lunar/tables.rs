//! Compact lunar calendar tables.

/// First year encoded in [`LUNAR_MONTH_DAYS`] and [`LUNAR_NEW_YEAR`].
pub(crate) const BASE_YEAR: u16 = 1997;

/// Per lunar year: bit `12 - i` set means month `i` (0-based) has 30 days,
/// bits 13..=16 name the leap month (0 = none).
pub(crate) const LUNAR_MONTH_DAYS: [u32; 204] = [
    0, // 1997, never indexed
    0x0B26D, 0x0125C, 0x0192C, 0x09A95, 0x01A94, 0x01B4A, 0x04B55, 0x00AD4,
    0x0F55B, 0x004BA, 0x0125A, 0x0B92B, 0x0152A, 0x01694, 0x096AA, 0x015AA,
    0x12AB5, 0x00974, 0x014B6, 0x0CA57, 0x00A56, 0x01526, 0x08E95, 0x00D54,
    0x015AA, 0x049B5, 0x0096C, 0x0D4AE, 0x0149C, 0x01A4C, 0x0BD26, 0x01AA6,
    0x00B54, 0x06D6A, 0x012DA, 0x1695D, 0x0095A, 0x0149A, 0x0DA4B, 0x01A4A,
    0x01AA4, 0x0BB54, 0x016B4, 0x00ADA, 0x0495B, 0x00936, 0x0F497, 0x01496,
    0x0154A, 0x0B6A5, 0x00DA4, 0x015B4, 0x06AB6, 0x0126E, 0x1092F, 0x0092E,
    0x00C96, 0x0CD4A, 0x01D4A, 0x00D64, 0x0956C, 0x0155C, 0x0125C, 0x0792E,
    0x0192C, 0x0FA95, 0x01A94, 0x01B4A, 0x0AB55, 0x00AD4, 0x014DA, 0x08A5D,
    0x00A5A, 0x1152B, 0x0152A, 0x01694, 0x0D6AA, 0x015AA, 0x00AB4, 0x094BA,
    0x014B6, 0x00A56, 0x07527, 0x00D26, 0x0EE53, 0x00D54, 0x015AA, 0x0A9B5,
    0x0096C, 0x014AE, 0x08A4E, 0x01A4C, 0x11D26, 0x01AA4, 0x01B54, 0x0CD6A,
    0x00ADA, 0x0095C, 0x0949D, 0x0149A, 0x01A2A, 0x05B25, 0x01AA4, 0x0FB52,
    0x016B4, 0x00ABA, 0x0A95B, 0x00936, 0x01496, 0x09A4B, 0x0154A, 0x136A5,
    0x00DA4, 0x015AC, 0x0CAB6, 0x0126E, 0x0092E, 0x08C97, 0x00A96, 0x00D4A,
    0x06DA5, 0x00D54, 0x0F56A, 0x0155A, 0x00A5C, 0x0B92E, 0x0152C, 0x01A94,
    0x09D4A, 0x01B2A, 0x16B55, 0x00AD4, 0x014DA, 0x0CA5D, 0x00A5A, 0x0151A,
    0x0BA95, 0x01654, 0x016AA, 0x04AD5, 0x00AB4, 0x0F4BA, 0x014B6, 0x00A56,
    0x0B517, 0x00D16, 0x00E52, 0x096AA, 0x00D6A, 0x165B5, 0x0096C, 0x014AE,
    0x0CA2E, 0x01A2C, 0x01D16, 0x0AD52, 0x01B52, 0x00B6A, 0x0656D, 0x0055C,
    0x0F45D, 0x0145A, 0x01A2A, 0x0DA95, 0x016A4, 0x01AD2, 0x08B5A, 0x00AB6,
    0x1455B, 0x008B6, 0x01456, 0x0D52B, 0x0152A, 0x01694, 0x0B6AA, 0x015AA,
    0x00AB6, 0x064B7, 0x008AE, 0x0EC57, 0x00A56, 0x00D2A, 0x0CD95, 0x00B54,
    0x0156A, 0x08A6D, 0x0095C, 0x014AE, 0x04A56, 0x01A54, 0x0DD2A, 0x01AAA,
    0x00B54, 0x0B56A, 0x014DA, 0x0095C, 0x074AB, 0x0149A, 0x0FA4B, 0x01652,
    0x016AA, 0x0CAD5, 0x005B4,
];

/// Solar date of each lunar new year, packed as `year << 9 | month << 5 | day`.
pub(crate) const LUNAR_NEW_YEAR: [u32; 204] = [
    0, // 1997, never indexed
    0xF9C3C, 0xF9E50, 0xFA045, 0xFA238, 0xFA44C, 0xFA641, 0xFA836, 0xFAA49,
    0xFAC3D, 0xFAE52, 0xFB047, 0xFB23A, 0xFB44E, 0xFB643, 0xFB837, 0xFBA4A,
    0xFBC3F, 0xFBE53, 0xFC048, 0xFC23C, 0xFC450, 0xFC645, 0xFC839, 0xFCA4C,
    0xFCC41, 0xFCE36, 0xFD04A, 0xFD23D, 0xFD451, 0xFD646, 0xFD83A, 0xFDA4D,
    0xFDC43, 0xFDE37, 0xFE04B, 0xFE23F, 0xFE453, 0xFE648, 0xFE83C, 0xFEA4F,
    0xFEC44, 0xFEE38, 0xFF04C, 0xFF241, 0xFF436, 0xFF64A, 0xFF83E, 0xFFA51,
    0xFFC46, 0xFFE3A, 0x10004E, 0x100242, 0x100437, 0x10064B, 0x100841, 0x100A53,
    0x100C48, 0x100E3C, 0x10104F, 0x101244, 0x101438, 0x10164C, 0x101842, 0x101A35,
    0x101C49, 0x101E3D, 0x102051, 0x102245, 0x10243A, 0x10264E, 0x102843, 0x102A37,
    0x102C4B, 0x102E3F, 0x103053, 0x103247, 0x10343B, 0x10364F, 0x103845, 0x103A38,
    0x103C4C, 0x103E42, 0x104036, 0x104249, 0x10443D, 0x104651, 0x104846, 0x104A3A,
    0x104C4E, 0x104E43, 0x105038, 0x10524A, 0x10543E, 0x105652, 0x105847, 0x105A3B,
    0x105C4F, 0x105E45, 0x106039, 0x10624C, 0x106441, 0x106635, 0x106849, 0x106A3D,
    0x106C51, 0x106E47, 0x10703C, 0x10724F, 0x107444, 0x107638, 0x10784C, 0x107A3F,
    0x107C53, 0x107E48, 0x10803D, 0x108250, 0x108446, 0x10863A, 0x10884E, 0x108A42,
    0x108C36, 0x108E4A, 0x10903E, 0x109251, 0x109447, 0x10963B, 0x10984F, 0x109A43,
    0x109C37, 0x109E4B, 0x10A041, 0x10A253, 0x10A448, 0x10A63D, 0x10A851, 0x10AA45,
    0x10AC39, 0x10AE4D, 0x10B042, 0x10B236, 0x10B44A, 0x10B63E, 0x10B852, 0x10BA47,
    0x10BC3B, 0x10BE4F, 0x10C044, 0x10C237, 0x10C44B, 0x10C641, 0x10C854, 0x10CA48,
    0x10CC3D, 0x10CE50, 0x10D045, 0x10D239, 0x10D44C, 0x10D642, 0x10D837, 0x10DA4A,
    0x10DC3E, 0x10DE52, 0x10E047, 0x10E23A, 0x10E44E, 0x10E643, 0x10E838, 0x10EA4B,
    0x10EC41, 0x10EE54, 0x10F049, 0x10F23C, 0x10F450, 0x10F645, 0x10F839, 0x10FA4C,
    0x10FC42, 0x10FE37, 0x11004B, 0x11023E, 0x110452, 0x110647, 0x11083B, 0x110A4E,
    0x110C43, 0x110E38, 0x11104C, 0x11123F, 0x111435, 0x111648, 0x11183C, 0x111A4F,
    0x111C45, 0x111E39, 0x11204D, 0x112242, 0x112436, 0x11264A, 0x11283E, 0x112A51,
    0x112C46, 0x112E3B, 0x11304F,
];

/// First year covered by [`SOLAR_TERM_BITS`].
pub(crate) const SOLAR_TERM_FIRST_YEAR: u16 = 2000;
/// Last year covered by [`SOLAR_TERM_BITS`].
pub(crate) const SOLAR_TERM_LAST_YEAR: u16 = 2050;

/// Three bytes per year, one bit per solar term (MSB first). A set bit moves
/// the term one day away from [`SOLAR_TERM_BASE_DAY`].
pub(crate) const SOLAR_TERM_BITS: [u8; 153] = [
    0x4E, 0xA6, 0x99, // 2000
    0x9C, 0xA2, 0x98, // 2001
    0x80, 0x00, 0x18, // 2002
    0x00, 0x10, 0x24, // 2003
    0x4E, 0xA6, 0x99, // 2004
    0x9C, 0xA2, 0x98, // 2005
    0x80, 0x82, 0x18, // 2006
    0x00, 0x10, 0x24, // 2007
    0x4E, 0xA6, 0xD9, // 2008
    0x9E, 0xA2, 0x98, // 2009
    0x80, 0x82, 0x18, // 2010
    0x00, 0x10, 0x04, // 2011
    0x4E, 0xE6, 0xD9, // 2012
    0x9E, 0xA6, 0xA8, // 2013
    0x80, 0x82, 0x18, // 2014
    0x00, 0x10, 0x00, // 2015
    0x0F, 0xE6, 0xD9, // 2016
    0xBE, 0xA6, 0x98, // 2017
    0x88, 0x82, 0x18, // 2018
    0x80, 0x00, 0x00, // 2019
    0x0F, 0xEF, 0xD9, // 2020
    0xBE, 0xA6, 0x99, // 2021
    0x8C, 0x82, 0x98, // 2022
    0x80, 0x00, 0x00, // 2023
    0x0F, 0xEF, 0xDB, // 2024
    0xBE, 0xA6, 0x99, // 2025
    0x9C, 0xA2, 0x98, // 2026
    0x80, 0x00, 0x18, // 2027
    0x0F, 0xEF, 0xDB, // 2028
    0xBE, 0xA6, 0x99, // 2029
    0x9C, 0xA2, 0x98, // 2030
    0x80, 0x00, 0x18, // 2031
    0x0F, 0xEF, 0xDB, // 2032
    0xBE, 0xA2, 0x99, // 2033
    0x8C, 0xA0, 0x98, // 2034
    0x80, 0x82, 0x18, // 2035
    0x0B, 0xEF, 0xDB, // 2036
    0xBE, 0xA6, 0x99, // 2037
    0x8C, 0xA2, 0x98, // 2038
    0x80, 0x82, 0x18, // 2039
    0x0F, 0xEF, 0xDB, // 2040
    0xBE, 0xE6, 0xD9, // 2041
    0x9E, 0xA2, 0x98, // 2042
    0x80, 0x82, 0x18, // 2043
    0x0F, 0xEF, 0xFB, // 2044
    0xBF, 0xE6, 0xD9, // 2045
    0x9E, 0xA6, 0x98, // 2046
    0x80, 0x82, 0x18, // 2047
    0x0F, 0xFF, 0xFF, // 2048
    0xFC, 0xEF, 0xD9, // 2049
    0xBE, 0xA6, 0x18, // 2050
];

/// Base day of month for each of the 24 terms, two per month.
pub(crate) const SOLAR_TERM_BASE_DAY: [u8; 24] = [
    6, 20, 4, 19, 6, 21,
    5, 20, 6, 21, 6, 21,
    7, 23, 8, 23, 8, 23,
    8, 24, 8, 22, 7, 22,
];
