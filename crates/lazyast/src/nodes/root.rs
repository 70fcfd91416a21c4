//! The root record of a decoded buffer and the metadata attached to it.

use super::*;

record! {
    /// The root record of a decoded buffer.
    pub struct RawTransferData(280) {
        child program @ 0: Program = "program",
        field comments @ 128: Seq<Comment> = "comments",
        field module @ 152: EcmaScriptModule = "module",
        field errors @ 256: Seq<Diagnostic> = "errors",
    }
}

record! {
    /// Whether the source was parsed as a script or a module.
    pub struct SourceType(2) {
        field source_type @ 1: ModuleKind = "sourceType",
    }
}

record! {
    /// A line or block comment.
    pub struct Comment(16) {
        field start @ 0: u32 = "start",
        field end @ 4: u32 = "end",
        field kind @ 12: CommentKind = "type",
    }
}

record! {
    /// A diagnostic reported by the parser.
    pub struct Diagnostic(80) {
        field severity @ 72: Severity = "severity",
        field message @ 0: Str = "message",
        field labels @ 16: Seq<DiagnosticLabel> = "labels",
        field help_message @ 40: Option<Str> = "helpMessage",
        field codeframe @ 56: Str = "codeframe",
    }
}

record! {
    /// A labelled source range attached to a [`Diagnostic`].
    pub struct DiagnosticLabel(24) {
        field message @ 8: Option<Str> = "message",
        field start @ 0: u32 = "start",
        field end @ 4: u32 = "end",
    }
}

fieldless! {
    /// `// line` or `/* block */`.
    pub enum CommentKind {
        Line = 0 => "Line",
        Block = 1 => "Block",
    }
}

fieldless! {
    /// Script or module goal.
    pub enum ModuleKind {
        Script = 0 => "script",
        Module = 1 => "module",
    }
}

fieldless! {
    /// Severity of a [`Diagnostic`].
    pub enum Severity {
        Error = 0 => "Error",
        Warning = 1 => "Warning",
        Advice = 2 => "Advice",
    }
}
