use clap::Subcommand;

/// Combine subcommands
#[derive(Subcommand, Debug)]
pub enum CombineCommands {
    /// Show the combined SLOs
    Show,

    /// Toggle SLOs in or out of the selection, then save
    Toggle {
        /// SLO ids, applied in order
        #[arg(required = true)]
        ids: Vec<String>,

        /// Print the resulting selection without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Deselect every SLO and save
    Clear,
}
