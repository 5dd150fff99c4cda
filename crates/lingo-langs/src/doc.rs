//! Document and markup languages.

use lingo_core::{Descriptor, DoctypeRule, MagicRule};

use crate::re;

pub(crate) fn descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::builder("HTML")
            .conforms_to(["Text"])
            .extensions([".html", ".htm"])
            .magic(MagicRule::bytes(0, &b"<!DOCTYPE html"[..]))
            .magic(MagicRule::bytes(0, &b"<html"[..]))
            // The real default depends on the Content-Type; UTF-8 is the
            // safe modern choice.
            .default_encoding("utf-8")
            .doctype(DoctypeRule::new(
                Some("HTML 4.01 Strict"),
                "HTML",
                Some("-//W3C//DTD HTML 4.01//EN"),
                Some("http://www.w3.org/TR/html4/strict.dtd"),
            ))
            .doctype(DoctypeRule::new(
                Some("HTML 4.01 Transitional"),
                "HTML",
                Some("-//W3C//DTD HTML 4.01 Transitional//EN"),
                Some("http://www.w3.org/TR/html4/loose.dtd"),
            ))
            .doctype(DoctypeRule::new(
                Some("HTML 4.01 Frameset"),
                "HTML",
                Some("-//W3C//DTD HTML 4.01 Frameset//EN"),
                Some("http://www.w3.org/TR/html4/frameset.dtd"),
            ))
            .doctype(DoctypeRule::new(
                Some("HTML 3.2"),
                "HTML",
                Some("-//W3C//DTD HTML 3.2 Final//EN"),
                None,
            ))
            .doctype(DoctypeRule::new(
                Some("HTML 2.0"),
                "HTML",
                Some("-//IETF//DTD HTML//EN"),
                None,
            ))
            .build(),
        Descriptor::builder("XHTML")
            .conforms_to(["XML", "HTML"])
            .extensions([".xhtml"])
            .doctype(DoctypeRule::new(
                Some("XHTML 1.0 Strict"),
                "html",
                Some("-//W3C//DTD XHTML 1.0 Strict//EN"),
                Some("http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd"),
            ))
            .doctype(DoctypeRule::new(
                Some("XHTML 1.0 Transitional"),
                "html",
                Some("-//W3C//DTD XHTML 1.0 Transitional//EN"),
                Some("http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd"),
            ))
            .doctype(DoctypeRule::new(
                Some("XHTML 1.0 Frameset"),
                "html",
                Some("-//W3C//DTD XHTML 1.0 Frameset//EN"),
                Some("http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd"),
            ))
            .build(),
        Descriptor::builder("XML")
            .conforms_to(["Text"])
            .extensions([".xml"])
            .default_encoding("utf-8")
            .magic(MagicRule::bytes(0, &b"<?xml"[..]))
            .build(),
        Descriptor::builder("XUL")
            .conforms_to(["XML"])
            .extensions([".xul"])
            .doctype(DoctypeRule::new(
                None,
                "window",
                Some("-//MOZILLA//DTD XUL V1.0//EN"),
                Some("http://www.mozilla.org/keymaster/gatekeeper/there.is.only.xul"),
            ))
            .build(),
        // eXtensible Binding Language.
        Descriptor::builder("XBL")
            .conforms_to(["XML"])
            .extensions([".xbl"])
            .doctype(DoctypeRule::new(
                None,
                "bindings",
                Some("-//MOZILLA//DTD XBL V1.0//EN"),
                Some("http://www.mozilla.org/xbl"),
            ))
            .build(),
        Descriptor::builder("YAML")
            .conforms_to(["Text"])
            .extensions([".yaml", ".yml"])
            .build(),
        Descriptor::builder("JSON")
            .conforms_to(["JavaScript"])
            .extensions([".json"])
            .build(),
        Descriptor::builder("DTD")
            .conforms_to(["Text"])
            .extensions([".dtd"])
            .build(),
        // Plain Old Documentation, common in the Perl world.
        Descriptor::builder("POD")
            .conforms_to(["Text"])
            .extensions([".pod"])
            .encoding_decl_pattern(re(r"(?m)^=encoding\s+(?P<encoding>[-\w.]+)"))
            .build(),
    ]
}
