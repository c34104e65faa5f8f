// cli.rs - Command-line configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "freehand")]
#[command(about = "Freehand drawing canvas", long_about = None)]
pub struct Cli {
    /// Canvas width in display pixels
    #[arg(long, default_value_t = 1200, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Canvas height in display pixels
    #[arg(long, default_value_t = 700, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Starting brush width (0-50), same rules as the SIZE field
    #[arg(long = "stroke-width", default_value = "0")]
    pub stroke_width: String,

    /// Window title
    #[arg(long, default_value = "Draw")]
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_window() {
        let cli = Cli::parse_from(["freehand"]);
        assert_eq!((cli.width, cli.height), (1200, 700));
        assert_eq!(cli.stroke_width, "0");
        assert_eq!(cli.title, "Draw");
    }

    #[test]
    fn overrides_and_zero_size_rejected() {
        let cli = Cli::parse_from([
            "freehand",
            "--width",
            "300",
            "--height",
            "200",
            "--stroke-width",
            "80",
        ]);
        assert_eq!((cli.width, cli.height), (300, 200));
        assert_eq!(cli.stroke_width, "80");
        assert!(Cli::try_parse_from(["freehand", "--width", "0"]).is_err());
    }
}
