// ABOUTME: Optional extra blocks inside template files
// ABOUTME: Keeps or strips `#!startExtra "name"` ... `#!endExtra` regions based on selected extras

use super::error::{Result, TemplateError};

const START_MARKER: &str = "#!startExtra";
const END_MARKER: &str = "#!endExtra";

enum Line<'a> {
    Start(&'a str),
    End,
    Text,
}

struct OpenBlock<'a> {
    name: &'a str,
    line: usize,
    keep: bool,
}

/// Resolve the extra blocks in `content`.
///
/// Marker lines are always dropped. A line inside a block survives only when
/// the extra of every enclosing block is in `selected`. Other lines are
/// emitted untouched, line endings included.
pub fn process_extras(content: &str, selected: &[String]) -> Result<String> {
    let mut output = String::with_capacity(content.len());
    let mut open: Vec<OpenBlock> = Vec::new();

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let number = index + 1;

        match classify(line, number)? {
            Line::Start(name) => {
                let parent_keeps = open.last().map_or(true, |b| b.keep);
                open.push(OpenBlock {
                    name,
                    line: number,
                    keep: parent_keeps && selected.iter().any(|s| s == name),
                });
            }
            Line::End => {
                if open.pop().is_none() {
                    return Err(TemplateError::UnexpectedEndExtra { line: number });
                }
            }
            Line::Text => {
                if open.last().map_or(true, |b| b.keep) {
                    output.push_str(line);
                }
            }
        }
    }

    if let Some(block) = open.last() {
        return Err(TemplateError::UnterminatedExtra {
            name: block.name.to_string(),
            line: block.line,
        });
    }

    Ok(output)
}

/// Names referenced by start markers, in order of first appearance
pub fn extra_names(content: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for (index, line) in content.lines().enumerate() {
        if let Ok(Line::Start(name)) = classify(line, index + 1) {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }

    names
}

fn classify(line: &str, number: usize) -> Result<Line<'_>> {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix(START_MARKER) {
        return parse_name(rest)
            .map(Line::Start)
            .ok_or(TemplateError::MalformedMarker { line: number });
    }

    if trimmed.starts_with(END_MARKER) {
        return Ok(Line::End);
    }

    Ok(Line::Text)
}

fn parse_name(rest: &str) -> Option<&str> {
    let name = rest.trim().strip_prefix('"')?.strip_suffix('"')?;
    if name.is_empty() || name.contains('"') {
        None
    } else {
        Some(name)
    }
}
