// src/properties.rs
//! Renders valid projects as a Java-style properties file.
//!
//! Each project's keys are prefixed with its identity. Analyzer-specific
//! settings come from the representative record alone.

use crate::aggregate::AggregatedProjectData;
use crate::config::Config;
use crate::error::{Result, ScanMergeError};
use crate::paths;
use crate::types::ProjectKind;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Renders every `Valid` project followed by the module list.
#[must_use]
pub fn render(projects: &[AggregatedProjectData], config: &Config) -> String {
    let mut out = String::new();
    let mut modules = Vec::new();

    for project in projects.iter().filter(|p| p.is_valid()) {
        let module = project.identity().unwrap_or_default();
        write_project(&mut out, module, project, config);
        modules.push(escape_value(module));
    }

    let _ = writeln!(out, "sonar.modules={}", modules.join(","));
    out
}

/// Writes rendered properties to `path`.
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn write_to(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| ScanMergeError::io(e, path))?;
    tracing::info!(path = %path.display(), "wrote analysis properties");
    Ok(())
}

fn write_project(out: &mut String, module: &str, project: &AggregatedProjectData, config: &Config) {
    let source = project.source_path();
    let name = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base_dir = source.parent().unwrap_or_else(|| Path::new(""));

    write_value(out, module, "sonar.projectKey", module);
    write_value(out, module, "sonar.projectName", &name);
    write_value(out, module, "sonar.projectBaseDir", &path_text(base_dir));
    if let Some(encoding) = project.encoding() {
        write_value(out, module, "sonar.sourceEncoding", encoding);
    }

    let files_key = match project.kind() {
        ProjectKind::Product => "sonar.sources",
        ProjectKind::Test => "sonar.tests",
    };
    write_list(out, module, files_key, project.files_to_analyze());

    // A project without a known language writes under every language whose
    // key declared an output.
    for (name, lang) in config.languages_for(project.language()) {
        let prefix = &lang.properties_prefix;
        let outputs = project.analyzer_output_paths_for(name);
        if !outputs.is_empty() {
            let key = format!("{prefix}.analyzer.projectOutPaths");
            write_list(out, module, &key, &outputs);
        }
        if let Some(report) = project.settings().get(&lang.roslyn_report_key) {
            let resolved = paths::resolve(base_dir, Path::new(report));
            let key = format!("{prefix}.roslyn.reportFilePaths");
            write_value(out, module, &key, &path_text(&resolved));
        }
    }

    if !project.telemetry_paths().is_empty() {
        write_list(out, module, &config.telemetry_key, project.telemetry_paths());
    }
    out.push('\n');
}

fn write_value(out: &mut String, module: &str, key: &str, value: &str) {
    let _ = writeln!(out, "{}={}", escape_key(&format!("{module}.{key}")), escape_value(value));
}

fn write_list<P: AsRef<Path>>(out: &mut String, module: &str, key: &str, items: &[P]) {
    let _ = write!(out, "{}=", escape_key(&format!("{module}.{key}")));
    let rendered: Vec<String> = items
        .iter()
        .map(|p| escape_value(&path_text(p.as_ref())))
        .collect();
    if rendered.is_empty() {
        out.push('\n');
        return;
    }
    let _ = writeln!(out, "\\\n{}", rendered.join(",\\\n"));
}

fn path_text(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Escapes a key: every space plus the separator and comment characters.
#[must_use]
pub fn escape_key(key: &str) -> String {
    escape(key, true)
}

/// Escapes a value: a leading space plus the separator and comment
/// characters.
#[must_use]
pub fn escape_value(value: &str) -> String {
    escape(value, false)
}

fn escape(text: &str, every_space: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.chars().enumerate() {
        match ch {
            ' ' if every_space || i == 0 => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(ch);
            }
            c if (' '..='~').contains(&c) => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{unit:04x}");
                }
            }
        }
    }
    out
}
