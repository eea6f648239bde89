use anyhow::Context;
use clap::{Parser, Subcommand};
use giphy_client::{
    Config, FetchOptions, Giphy, Media, Page, RandomOptions, Rating, SearchOptions,
    TranslateOptions, TrendingOptions,
};
use tracing_subscriber::EnvFilter;

/// Reads GIPHY_API_KEY (and optionally GIPHY_BASE_URL, GIPHY_TIMEOUT_SECS)
/// from the environment.
#[derive(Parser)]
#[command(name = "giphy")]
#[command(about = "Query the GIPHY API from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum number of results
    #[arg(short, long, global = true)]
    limit: Option<u32>,

    /// Number of results to skip
    #[arg(short, long, global = true)]
    offset: Option<u32>,

    /// Content rating: g, pg, pg-13 or r
    #[arg(short, long, global = true)]
    rating: Option<Rating>,
}

#[derive(Subcommand)]
enum Commands {
    /// Trending gifs
    Trending,

    /// Search gifs
    Search { query: String },

    /// The gif that best matches a phrase
    Translate {
        phrase: String,

        #[arg(short, long, default_value = "1")]
        weirdness: u8,
    },

    /// A random gif
    Random { tag: Option<String> },

    /// Gifs by id
    Get {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// The gif category taxonomy
    Categories,

    /// Search channels
    Channels { query: String },

    /// Tag suggestions for a partial query
    Autocomplete { query: String },

    /// Trending stickers, or stickers matching a query
    Stickers { query: Option<String> },

    /// The emoji catalog, or one emoji's variations
    Emoji { id: Option<String> },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("could not read the GIPHY configuration")?;
    let giphy = Giphy::from_config(&config)?;

    let page = Page {
        limit: cli.limit,
        offset: cli.offset,
    };
    let search = SearchOptions {
        limit: cli.limit,
        offset: cli.offset,
        rating: cli.rating,
        ..Default::default()
    };

    match cli.command {
        Commands::Trending => {
            let options = TrendingOptions {
                limit: cli.limit,
                offset: cli.offset,
                rating: cli.rating,
                ..Default::default()
            };
            for gif in giphy.gifs().trending(&options)? {
                print_media(&gif);
            }
        }

        Commands::Search { query } => {
            for gif in giphy.gifs().search(&query, &search)? {
                print_media(&gif);
            }
        }

        Commands::Translate { phrase, weirdness } => {
            let options = TranslateOptions {
                weirdness,
                ..Default::default()
            };
            let gif = giphy.gifs().translate(&phrase, &options)?;
            print_media(&gif);
        }

        Commands::Random { tag } => {
            let options = RandomOptions {
                tag,
                rating: cli.rating,
                ..Default::default()
            };
            let gif = giphy.gifs().random(&options)?;
            print_media(&gif);
        }

        Commands::Get { ids } => {
            let options = FetchOptions {
                rating: cli.rating,
                ..Default::default()
            };
            if ids.len() == 1 {
                let gif = giphy.gifs().fetch(&ids[0], &options)?;
                print_media(&gif);
            } else {
                for gif in giphy.gifs().fetch_many(&ids, &options)? {
                    print_media(&gif);
                }
            }
        }

        Commands::Categories => {
            for category in giphy.gifs().fetch_categories()? {
                let subs: Vec<&str> = category
                    .subcategories
                    .iter()
                    .map(|s| s.name.as_str())
                    .collect();
                println!("{}: {}", category.name, subs.join(", "));
            }
        }

        Commands::Channels { query } => {
            let channels = giphy.gifs().fetch_channels(&query, &page)?;
            if channels.is_empty() {
                println!("No channels match {:?}", query);
            }
            for channel in channels {
                println!(
                    "{}\t{}",
                    channel.name().unwrap_or("-"),
                    channel.url.as_deref().unwrap_or("-")
                );
            }
        }

        Commands::Autocomplete { query } => {
            for term in giphy.gifs().fetch_tag_autocomplete(&query, &page)? {
                println!("{}", term.name);
            }
        }

        Commands::Stickers { query } => {
            let stickers = match query {
                Some(q) => giphy.stickers().search(&q, &search)?,
                None => {
                    let options = TrendingOptions {
                        limit: cli.limit,
                        offset: cli.offset,
                        rating: cli.rating,
                        ..Default::default()
                    };
                    giphy.stickers().fetch_trending(&options)?
                }
            };
            for sticker in stickers {
                print_media(&sticker);
            }
        }

        Commands::Emoji { id: Some(id) } => match giphy.emoji().get_variations(&id)? {
            Some(emoji) => {
                print_media(&emoji);
                for variation in &emoji.variations {
                    print!("  ");
                    print_media(variation);
                }
            }
            None => println!("No variations for {}", id),
        },

        Commands::Emoji { id: None } => {
            for emoji in giphy.emoji().fetch(&page)? {
                print_media(&emoji);
            }
        }
    }

    Ok(())
}

fn print_media(media: &Media) {
    println!(
        "{}\t{}\t{}",
        media.id,
        media.title.as_deref().unwrap_or("-"),
        media.url.as_deref().unwrap_or("-")
    );
}
