//! Plain-text rendering of [`View`] trees.

use std::fmt::Write as _;

use atrium_primitives::{Tone, View};

const INDENT: &str = "  ";
const BAR_WIDTH: usize = 20;

/// Renders a view as indented text lines.
pub fn render(view: &View) -> String {
	let mut out = String::new();
	write_view(&mut out, view, 0);
	out
}

fn write_view(out: &mut String, view: &View, depth: usize) {
	let pad = INDENT.repeat(depth);
	match view {
		View::Empty => {}
		View::Text { text } => line(out, &pad, text),
		View::Heading { text } => line(out, &pad, &format!("## {text}")),
		View::Spinner { label } => line(out, &pad, &format!("... {label}")),
		View::ErrorPanel { title, message } => {
			line(out, &pad, &format!("!! {title}"));
			line(out, &pad, &format!("{INDENT}{message}"));
		}
		View::Panel { title, children } => {
			line(out, &pad, &format!("[{title}]"));
			for child in children {
				write_view(out, child, depth + 1);
			}
		}
		View::Badge { label, tone } => line(out, &pad, &badge(label, *tone)),
		View::Progress { label, percent } => line(out, &pad, &progress(label, *percent)),
		View::Column { children } => {
			for child in children {
				write_view(out, child, depth);
			}
		}
		View::Menu { title, sections } => {
			line(out, &pad, &format!("# {title}"));
			for (section, items) in sections {
				line(out, &pad, &format!("{INDENT}{section}"));
				for (id, label) in items {
					line(out, &pad, &format!("{INDENT}{INDENT}- {label} ({id})"));
				}
			}
		}
	}
}

fn line(out: &mut String, pad: &str, text: &str) {
	let _ = writeln!(out, "{pad}{text}");
}

fn badge(label: &str, tone: Tone) -> String {
	match tone {
		Tone::Neutral => format!("({label})"),
		tone => format!("({label}) {}", tone.label()),
	}
}

fn progress(label: &str, percent: u8) -> String {
	let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
	format!("{label} [{}{}] {percent}%", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
