//! Programming languages.

use lingo_core::{Descriptor, MagicRule};

use crate::{re, shebang};

pub(crate) fn descriptors() -> Vec<Descriptor> {
    vec![
        Descriptor::builder("Python")
            .conforms_to(["Text"])
            .extensions([".py", ".pyw"])
            .magic(shebang(r"(?im)\A#!.*python.*$"))
            .default_encoding("ascii")
            // PEP 263 coding declaration.
            .encoding_decl_pattern(re(r"coding[:=]\s*(?P<encoding>[-\w.]+)"))
            .build(),
        Descriptor::builder("Compiled Python")
            .extensions([".pyc", ".pyo"])
            .build(),
        Descriptor::builder("Perl")
            .conforms_to(["Text"])
            .extensions([".pl", ".pm", ".t"])
            // Cons make-replacement tool files.
            .filenames(["Construct", "Conscript"])
            .magic(shebang(r"(?im)\A#!.*perl.*$"))
            .default_encoding("iso8859-1")
            // `use encoding "..."` (5.8) and `use encoding::source "..."` (5.9.5).
            .encoding_decl_pattern(re(
                r#"use\s+encoding(?:::source)?\s+['"](?P<encoding>[\w-]+)['"]"#,
            ))
            .build(),
        Descriptor::builder("PHP")
            .conforms_to(["Text"])
            // .phtml is commonly used for Zend Framework view files.
            .extensions([".php", ".inc", ".phtml"])
            .magic(MagicRule::bytes(0, &b"<?php"[..]))
            .magic(shebang(r"(?im)\A#!.*php.*$"))
            .build(),
        Descriptor::builder("Tcl")
            .conforms_to(["Text"])
            .extensions([".tcl"])
            .magic(shebang(r"(?im)\A#!.*(tclsh|wish|expect).*$"))
            // Catches the sh-restart idiom:
            //   #!/bin/sh
            //   # the next line restarts using tclsh \
            //   exec tclsh "$0" "$@"
            .magic(shebang(r"(?ims)\A#!.*^exec [^\r\n]*?(tclsh|wish|expect)"))
            .build(),
        Descriptor::builder("Ruby")
            .conforms_to(["Text"])
            .extensions([".rb"])
            .filenames(["Rakefile"])
            .magic(shebang(r"(?im)\A#!.*ruby.*$"))
            .build(),
        Descriptor::builder("JavaScript")
            .conforms_to(["Text"])
            .extensions([".js"])
            .build(),
        Descriptor::builder("C")
            .conforms_to(["Text"])
            // .xs: Perl extension modules, close enough to edit as C.
            .extensions([".c", ".xs"])
            .build(),
        Descriptor::builder("C++")
            .conforms_to(["Text"])
            .extensions([".c++", ".cpp", ".cxx", ".h", ".h++", ".hpp", ".hxx", ".xs"])
            .build(),
        Descriptor::builder("Ada")
            .conforms_to(["Text"])
            .extensions([".ada"])
            .build(),
        Descriptor::builder("Batch")
            .conforms_to(["Text"])
            .extensions([".bat", ".cmd"])
            .build(),
        Descriptor::builder("Bash")
            .conforms_to(["Text"])
            .extensions([".sh"])
            .filenames([".bash_profile", ".bashrc", ".bash_logout"])
            .magic(shebang(r"(?im)\A#!.*/\bbash\b$"))
            .build(),
        Descriptor::builder("Bourne shell")
            .conforms_to(["Text"])
            .magic(shebang(r"(?im)\A#!.*/\bsh\b$"))
            .build(),
        Descriptor::builder("tcsh")
            .conforms_to(["Text"])
            .magic(shebang(r"(?m)\A#!.*/\btcsh\b$"))
            .filenames([
                "csh.cshrc", "csh.login", "csh.logout", ".tcshrc", ".cshrc", ".login",
                ".logout",
            ])
            .build(),
        Descriptor::builder("C#")
            .conforms_to(["Text"])
            .extensions([".cs"])
            .build(),
        Descriptor::builder("Erlang")
            .conforms_to(["Text"])
            .extensions([".erl"])
            .build(),
        Descriptor::builder("Fortran 77")
            .conforms_to(["Text"])
            .extensions([".f"])
            .build(),
        Descriptor::builder("Fortran")
            .conforms_to(["Text"])
            .extensions([".f95"])
            .build(),
        Descriptor::builder("Java")
            .conforms_to(["Text"])
            .extensions([".java", ".jav"])
            .build(),
        Descriptor::builder("Lisp")
            .conforms_to(["Text"])
            .extensions([".lis"])
            .build(),
        Descriptor::builder("Lua")
            .conforms_to(["Text"])
            .extensions([".lua"])
            .build(),
        Descriptor::builder("Pascal")
            .conforms_to(["Text"])
            .extensions([".pas"])
            .build(),
        Descriptor::builder("Smalltalk")
            .conforms_to(["Text"])
            .extensions([".st"])
            .build(),
        Descriptor::builder("ActionScript")
            .conforms_to(["Text"])
            .extensions([".as", ".asc"])
            .build(),
        Descriptor::builder("Assembler")
            .conforms_to(["Text"])
            .extensions([".asm"])
            .build(),
        Descriptor::builder("Eiffel")
            .conforms_to(["Text"])
            .extensions([".e"])
            .build(),
        Descriptor::builder("Haskell")
            .conforms_to(["Text"])
            .extensions([".hs"])
            .build(),
        Descriptor::builder("PowerShell")
            .conforms_to(["Text"])
            .extensions([".ps1"])
            .build(),
        Descriptor::builder("Scheme")
            .conforms_to(["Text"])
            .extensions([".scm"])
            .build(),
        Descriptor::builder("VHDL")
            .conforms_to(["Text"])
            .extensions([".vhdl"])
            .build(),
        Descriptor::builder("Verilog")
            .conforms_to(["Text"])
            .build(),
        // The Basic family.
        Descriptor::builder("FreeBASIC")
            .conforms_to(["Text"])
            .extensions([".bas"])
            .build(),
        Descriptor::builder("PureBasic")
            .conforms_to(["Text"])
            .extensions([".pb"])
            .build(),
        // Claims .pb too; registered later, so it wins the extension.
        Descriptor::builder("PowerBasic")
            .conforms_to(["Text"])
            .extensions([".pb"])
            .build(),
        Descriptor::builder("BlitzBasic")
            .conforms_to(["Text"])
            .extensions([".bb"])
            .build(),
        Descriptor::builder("VisualBasic")
            .conforms_to(["Text"])
            .extensions([".vb"])
            .build(),
        Descriptor::builder("VBScript")
            .conforms_to(["Text"])
            .extensions([".vbs"])
            .build(),
        // Scripting language of the Baan ERP system.
        Descriptor::builder("Baan")
            .conforms_to(["Text"])
            .extensions([".bc"])
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use crate::catalog;

    #[test]
    fn python_shebang_variants() {
        let cat = catalog();
        for head in [
            &b"#!/usr/bin/python\n"[..],
            b"#!/usr/bin/env python\nimport os\n",
            b"#! /usr/bin/Python2.4",
        ] {
            assert_eq!(cat.by_magic(head, false).unwrap().name(), "Python");
        }
    }

    #[test]
    fn tcl_exec_restart_beats_bourne_shell() {
        let cat = catalog();
        let head = b"#!/bin/sh\n# the next line restarts using tclsh \\\nexec tclsh \"$0\" \"$@\"\n";
        assert_eq!(cat.by_magic(head, false).unwrap().name(), "Tcl");
    }

    #[test]
    fn plain_sh_shebang_is_bourne_shell() {
        let cat = catalog();
        assert_eq!(
            cat.by_magic(b"#!/bin/sh\necho hi\n", false).unwrap().name(),
            "Bourne shell"
        );
        assert_eq!(
            cat.by_magic(b"#!/bin/bash\necho hi\n", false).unwrap().name(),
            "Bash"
        );
    }

    #[test]
    fn php_open_tag_and_shebang() {
        let cat = catalog();
        assert_eq!(cat.by_magic(b"<?php echo 1;", false).unwrap().name(), "PHP");
        assert_eq!(
            cat.by_magic(b"#!/usr/bin/php\n", false).unwrap().name(),
            "PHP"
        );
    }

    #[test]
    fn perl_encoding_declaration_extracts_group() {
        let cat = catalog();
        let perl = cat.resolve("Perl").unwrap();
        let pattern = perl.encoding_decl_pattern().unwrap();
        let caps = pattern.captures(r#"use encoding "utf-8";"#).unwrap();
        assert_eq!(&caps["encoding"], "utf-8");
        let caps = pattern.captures("use encoding::source 'euc-jp';").unwrap();
        assert_eq!(&caps["encoding"], "euc-jp");
    }

    #[test]
    fn python_inherits_nothing_but_declares_ascii() {
        let cat = catalog();
        let python = cat.resolve("Python").unwrap();
        assert_eq!(python.default_encoding(), Some("ascii"));
        let caps = python
            .encoding_decl_pattern()
            .unwrap()
            .captures("# -*- coding: utf-8 -*-")
            .unwrap();
        assert_eq!(&caps["encoding"], "utf-8");
    }

    #[test]
    fn shell_config_filenames() {
        let cat = catalog();
        assert_eq!(cat.by_filename(".bashrc").unwrap().name(), "Bash");
        assert_eq!(cat.by_filename(".cshrc").unwrap().name(), "tcsh");
        assert_eq!(cat.by_filename("Rakefile").unwrap().name(), "Ruby");
    }

    #[test]
    fn powerbasic_wins_the_contested_pb_extension() {
        let cat = catalog();
        assert_eq!(cat.by_extension(".pb").unwrap().name(), "PowerBasic");
    }
}
