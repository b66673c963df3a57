use clap::ValueEnum;
use sbomscout_inventory::ScanOptions;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    Csv,
    Json,
    Markdown,
    All,
}

impl ReportFormat {
    pub(crate) fn includes_csv(self) -> bool {
        matches!(self, Self::Csv | Self::All)
    }

    pub(crate) fn includes_json(self) -> bool {
        matches!(self, Self::Json | Self::All)
    }

    pub(crate) fn includes_markdown(self) -> bool {
        matches!(self, Self::Markdown | Self::All)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub(crate) enum GraphFormat {
    Dot,
    Json,
}

/// Translate scan flags into domain options
pub(crate) fn scan_options(no_gitignore: bool, flat: bool) -> ScanOptions {
    let mut options = if flat {
        ScanOptions::flat()
    } else {
        ScanOptions::default()
    };
    options.respect_gitignore = !no_gitignore;
    options
}
