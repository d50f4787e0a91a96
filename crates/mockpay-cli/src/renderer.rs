//! Terminal output for `--format text`.
//!
//! Responses are markdown record blocks rendered through one termimad skin.
//! Failures are single lines rendered through a second skin so they stand
//! out between records.

use termimad::{crossterm::style::Color, Alignment, MadSkin};

pub struct TerminalRenderer {
    rich_enabled: bool,
    record_skin: MadSkin,
    failure_skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        Self {
            rich_enabled,
            record_skin: record_skin(),
            failure_skin: failure_skin(),
        }
    }

    /// Print a record block: a `#` title line, bullet fields, optional
    /// `##` sections and fenced JSON.
    pub fn render_record(&self, markdown: &str) {
        if self.rich_enabled {
            self.record_skin.print_text(markdown);
        } else {
            print!("{markdown}");
        }
    }

    /// Print a one-line failure summary.
    pub fn render_failure(&self, line: &str) {
        if self.rich_enabled {
            self.failure_skin.print_inline(line);
            println!();
        } else {
            println!("{line}");
        }
    }
}

fn record_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.set_headers_fg(Color::Cyan);
    // record titles read as list entries, not centered banners
    for header in &mut skin.headers {
        header.align = Alignment::Left;
    }
    skin.bold.set_fg(Color::Yellow);
    skin.code_block.set_bg(Color::AnsiValue(238));
    skin
}

fn failure_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Red);
    skin.inline_code.set_fg(Color::Magenta);
    skin
}
