//! Diagnostic and error reporting for SimpleC.
//! SimpleC 的诊断和错误报告。
//!
//! Every fault in the front-end — lexical, syntactic or semantic — becomes
//! a [`Diagnostic`] value; no stage ever aborts. This crate also renders
//! diagnostics to the terminal using ariadne.
//! 前端中的每个故障（词法、语法或语义）都会成为一个 [`Diagnostic`] 值，
//! 任何阶段都不会中止。本 crate 还使用 ariadne 将诊断渲染到终端。

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};

use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};

/// Render a diagnostic to stderr with a source snippet.
/// 将诊断信息连同源码片段渲染到标准错误输出。
pub fn render(source: &str, filename: &str, diagnostic: &Diagnostic) {
    let mut colors = ColorGenerator::new();
    let mut report = Report::build(ReportKind::Error, filename, diagnostic.span.start as usize)
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    report = report.with_label(
        Label::new((filename, diagnostic.span.range()))
            .with_message(diagnostic.kind.label())
            .with_color(colors.next()),
    );

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .eprint((filename, Source::from(source)))
        .ok();
}
