use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "seo-subscribe", version, about = "SEO report companion: subscriptions and the metrics guide")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit the subscribe form.
    Subscribe {
        #[arg(long)]
        email: String,
        #[arg(long, default_value_t = false, help = "Opt out of feature update emails")]
        no_feature_updates: bool,
        #[arg(long, default_value_t = false, help = "Opt out of SEO tips emails")]
        no_seo_tips: bool,
    },
    /// Print the SEO metrics guide.
    Guide {
        #[arg(long, help = "Output machine-readable JSON")]
        json: bool,
        #[arg(long, help = "Only print this category")]
        category: Option<String>,
    },
    /// Print the definition of one metric.
    Lookup { category: String, metric: String },
}
