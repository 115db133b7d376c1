use std::str::FromStr;

use sports_feed::{
    BasketballClient, Config, RosterScreen, RoundId, RoundsScreen, Screen, SoccerClient, View,
    NO_MATCHES,
};
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> sports_feed::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let screen = args
        .next()
        .and_then(|s| Screen::from_str(&s).ok())
        .unwrap_or(Screen::Home);
    match screen {
        Screen::Home => {
            println!("{}", Screen::Home.title());
            for entry in Screen::iter().filter(|s| *s != Screen::Home) {
                println!("  browse {entry}: {}", entry.title());
            }
        }
        Screen::Soccer => {
            let config = Config::from_env()?;
            let client = SoccerClient::from_config(&config)?;
            let mut screen = RoundsScreen::with_delay(client, config.matches_delay);
            screen.load_rounds().await;

            let rounds = screen.rounds().iter().map(|r| r.label()).collect::<Vec<_>>();
            println!("Rounds: {}", rounds.join(", "));

            let selected = args.next().and_then(|s| s.parse().ok()).map(RoundId);
            screen.select_round(selected);
            screen.search().await;

            match screen.view() {
                View::Loading => println!("loading..."),
                View::Error(message) => println!("{message}"),
                View::Empty => println!("{NO_MATCHES}"),
                View::Ready(cards) => {
                    for card in cards {
                        println!(
                            "{} {} {} | {} {} | {}",
                            card.home_name,
                            card.score,
                            card.away_name,
                            card.date,
                            card.time,
                            card.venue
                        );
                    }
                }
            }
        }
        Screen::Basketball => {
            let config = Config::from_env()?;
            let client = BasketballClient::from_config(&config)?;
            let mut screen = RosterScreen::new(client);
            screen.load_roster().await;

            match screen.view() {
                View::Loading => println!("loading..."),
                View::Error(message) => println!("Error: {message}"),
                View::Empty => {}
                View::Ready(cards) => {
                    for card in cards {
                        println!("{:>6} {}", card.id, card.name);
                    }
                }
            }
        }
    }

    Ok(())
}
