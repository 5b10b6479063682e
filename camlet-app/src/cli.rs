//! Command-line definitions

use clap::{Parser, Subcommand};

/// Command-line webcam browser
#[derive(Parser, Debug)]
#[command(name = "camlet-app", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Command {
    /// Browse the random-order camera list
    List {
        /// Number of pages to load
        #[arg(default_value_t = 1)]
        pages: usize,
    },
    /// Cameras inside a map region
    #[command(allow_negative_numbers = true)]
    Map {
        /// Center latitude
        lat: f64,
        /// Center longitude
        lon: f64,
        /// Latitude span in degrees
        dlat: f64,
        /// Longitude span in degrees
        dlon: f64,
    },
    /// Show or edit the favorite cameras
    Favorites {
        #[command(subcommand)]
        action: Option<FavoriteAction>,
    },
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum FavoriteAction {
    /// Bookmark a camera
    Add { id: String },
    /// Drop a bookmarked camera
    Remove { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(std::iter::once("camlet-app").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn test_list_defaults_to_one_page() {
        assert_eq!(parse(&["list"]), Command::List { pages: 1 });
        assert_eq!(parse(&["list", "3"]), Command::List { pages: 3 });
    }

    #[test]
    fn test_map_accepts_negative_coordinates() {
        assert_eq!(
            parse(&["map", "-33.86", "-151.2", "0.5", "0.5"]),
            Command::Map {
                lat: -33.86,
                lon: -151.2,
                dlat: 0.5,
                dlon: 0.5,
            }
        );
    }

    #[test]
    fn test_favorites_actions() {
        assert_eq!(parse(&["favorites"]), Command::Favorites { action: None });
        assert_eq!(
            parse(&["favorites", "add", "c1"]),
            Command::Favorites {
                action: Some(FavoriteAction::Add { id: "c1".into() })
            }
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        let argv = |args: &[&'static str]| std::iter::once("camlet-app").chain(args.to_vec());
        assert!(Cli::try_parse_from(argv(&[])).is_err());
        assert!(Cli::try_parse_from(argv(&["list", "many"])).is_err());
        assert!(Cli::try_parse_from(argv(&["map", "1", "2", "3"])).is_err());
        assert!(Cli::try_parse_from(argv(&["favorites", "remove"])).is_err());
    }
}
