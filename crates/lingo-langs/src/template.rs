//! Template languages.
//!
//! Most of these have no reliable static clues of their own (a Django
//! HTML template usually looks like HTML); they are still registered so
//! that name- and mode-based resolution and conformance queries work.

use lingo_core::Descriptor;

pub(crate) fn descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::builder("RHTML")
            .conforms_to(["Text"])
            .extensions([".rhtml"])
            .build(),
        Descriptor::builder("Django HTML Template")
            .conforms_to(["Text"])
            .build(),
        Descriptor::builder("Django Text Template")
            .conforms_to(["Text"])
            .build(),
        Descriptor::builder("Django XML Template")
            .conforms_to(["Text"])
            .build(),
        Descriptor::builder("Mason HTML Template")
            .conforms_to(["Text"])
            .build(),
        Descriptor::builder("Template Toolkit HTML Template")
            .conforms_to(["Text"])
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use crate::catalog;

    #[test]
    fn templates_resolve_by_name_and_are_text() {
        let cat = catalog();
        for name in [
            "RHTML",
            "Django HTML Template",
            "Django Text Template",
            "Django XML Template",
            "Mason HTML Template",
            "Template Toolkit HTML Template",
        ] {
            let lang = cat.resolve(name).unwrap();
            assert!(lang.is_text(), "{name}");
        }
    }

    #[test]
    fn rhtml_extension() {
        let cat = catalog();
        assert_eq!(cat.by_extension(".rhtml").unwrap().name(), "RHTML");
    }
}
