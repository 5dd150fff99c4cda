//! Languages that don't fit the other families.

use lingo_core::Descriptor;

use crate::re;

pub(crate) fn descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::builder("Makefile")
            .conforms_to(["Text"])
            .extensions([".mak"])
            .filename_pattern(re(r"^[Mm]akefile.*$"))
            .build(),
        Descriptor::builder("CSS")
            .conforms_to(["Text"])
            .extensions([".css"])
            .default_encoding("utf-8")
            // @charset "<IANA charset name>"; at the very start of the
            // document (css-syntax).
            .encoding_decl_pattern(re(r#"\A@charset "(?P<encoding>[\w-]+)";"#))
            .build(),
        // Code-intelligence XML dialect describing scanned code structure.
        Descriptor::builder("CIX")
            .conforms_to(["XML"])
            .extensions([".cix"])
            .build(),
        Descriptor::builder("diff")
            .conforms_to(["Text"])
            .extensions([".patch", ".diff"])
            .build(),
        Descriptor::builder("IDL")
            .conforms_to(["Text"])
            .extensions([".idl"])
            .build(),
    ]
}
