//! Binary file formats.
//!
//! Magic numbers follow `/usr/share/file/magic`. Note the collision
//! between Mach-O universal binaries and compiled Java class data
//! (both start 0xcafebabe): Java classes carry no magic rule here and are
//! identified by their `.class` extension before magic probing happens.

use lingo_core::{Descriptor, MagicRule, NumberLayout};

pub(crate) fn descriptors() -> Vec<Descriptor> {
    vec![
        // ELF-format binary, the standard executable on Linux.
        Descriptor::builder("ELF")
            .magic(MagicRule::bytes(0, &b"\x7fELF"[..]))
            .build(),
        Descriptor::builder("Mach-O universal")
            .magic(MagicRule::number(0, NumberLayout::U32Be, 0xcafe_babe))
            .build(),
        Descriptor::builder("Mach-O")
            .magic(MagicRule::number(0, NumberLayout::U32Le, 0xfeed_face))
            .magic(MagicRule::number(0, NumberLayout::U32Be, 0xfeed_face))
            .build(),
        Descriptor::builder("Windows executable")
            .extensions([".exe", ".dll"])
            .magic(MagicRule::bytes(0, &b"MZ"[..]))
            .build(),
        Descriptor::builder("compiled Java class")
            .extensions([".class"])
            .build(),
        Descriptor::builder("Zip archive")
            .extensions([".zip"])
            .magic(MagicRule::bytes(0, &b"PK\x03\x04"[..]))
            .build(),
        // Microsoft Installer package.
        Descriptor::builder("MSI")
            .extensions([".msi"])
            .build(),
        Descriptor::builder("Jar archive")
            .extensions([".jar"])
            .magic(MagicRule::bytes(0, &b"PK\x03\x04"[..]))
            .build(),
        Descriptor::builder("Windows icon")
            .extensions([".ico"])
            .build(),
        Descriptor::builder("Mac icon")
            .extensions([".icns"])
            .build(),
        Descriptor::builder("XPM")
            .extensions([".xpm"])
            .magic(MagicRule::bytes(0, &b"/* XPM */"[..]))
            .build(),
        Descriptor::builder("Adobe Photoshop Document")
            .extensions([".psd"])
            .magic(MagicRule::bytes(0, &b"8BPS"[..]))
            .build(),
        Descriptor::builder("PNG")
            .extensions([".png"])
            .magic(MagicRule::bytes(0, &b"\x89PNG"[..]))
            .build(),
        Descriptor::builder("GIF")
            .extensions([".gif"])
            .magic(MagicRule::bytes(0, &b"GIF8"[..]))
            .build(),
        Descriptor::builder("JPEG")
            .extensions([".jpg", ".jpeg"])
            .magic(MagicRule::number(0, NumberLayout::U16Be, 0xffd8))
            .build(),
        Descriptor::builder("Bitmap image")
            .extensions([".bmp"])
            .magic(MagicRule::bytes(0, &b"BM"[..]))
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use crate::catalog;

    #[test]
    fn elf_and_exe_headers() {
        let cat = catalog();
        assert_eq!(
            cat.by_magic(b"\x7fELF\x02\x01\x01\x00", false).unwrap().name(),
            "ELF"
        );
        assert_eq!(
            cat.by_magic(b"MZ\x90\x00\x03", false).unwrap().name(),
            "Windows executable"
        );
    }

    #[test]
    fn mach_o_both_endiannesses() {
        let cat = catalog();
        assert_eq!(
            cat.by_magic(b"\xce\xfa\xed\xfe\x07\x00", false).unwrap().name(),
            "Mach-O"
        );
        assert_eq!(
            cat.by_magic(b"\xfe\xed\xfa\xce\x00\x00", false).unwrap().name(),
            "Mach-O"
        );
    }

    #[test]
    fn cafebabe_is_macho_universal_by_magic() {
        // Compiled Java class data shares the magic; it wins only by
        // extension, never by probing.
        let cat = catalog();
        assert_eq!(
            cat.by_magic(b"\xca\xfe\xba\xbe\x00\x00", false).unwrap().name(),
            "Mach-O universal"
        );
        assert_eq!(
            cat.by_extension(".class").unwrap().name(),
            "compiled Java class"
        );
    }

    #[test]
    fn zip_wins_jar_by_registration_order() {
        let cat = catalog();
        assert_eq!(
            cat.by_magic(b"PK\x03\x04\x14\x00", false).unwrap().name(),
            "Zip archive"
        );
        assert_eq!(cat.by_extension(".jar").unwrap().name(), "Jar archive");
    }

    #[test]
    fn image_formats() {
        let cat = catalog();
        assert_eq!(cat.by_magic(b"\x89PNG\r\n\x1a\n", false).unwrap().name(), "PNG");
        assert_eq!(cat.by_magic(b"GIF89a", false).unwrap().name(), "GIF");
        assert_eq!(cat.by_magic(b"\xff\xd8\xff\xe0", false).unwrap().name(), "JPEG");
        assert_eq!(
            cat.by_magic(b"BM\x8a\x02", false).unwrap().name(),
            "Bitmap image"
        );
        assert_eq!(cat.by_magic(b"8BPS\x00\x01", false).unwrap().name(),
            "Adobe Photoshop Document");
    }

    #[test]
    fn binary_formats_are_not_text() {
        let cat = catalog();
        for name in ["ELF", "Mach-O", "Zip archive", "PNG"] {
            assert!(!cat.resolve(name).unwrap().is_text(), "{name}");
        }
    }
}
