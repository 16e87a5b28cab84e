use owo_colors::OwoColorize;

use crate::process::Outcome;

/// 書き戻しモードの実行サマリ
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    reformatted: usize,
    unchanged: usize,
    skipped: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Reformatted => self.reformatted += 1,
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }

    pub fn line(&self) -> String {
        let prefix = if self.reformatted > 0 {
            "✓".green().to_string()
        } else {
            "•".yellow().to_string()
        };
        format!(
            "{} {} file(s) reformatted, {} unchanged, {} skipped",
            prefix,
            self.reformatted.green(),
            self.unchanged,
            self.skipped
        )
    }
}

/// importブロックの無いファイルの通知（stdout はパイプ用に汚さない）
pub fn skip_notice(display_path: &str) {
    eprintln!("{}", format!("skip file {display_path} since no import").dimmed());
}
