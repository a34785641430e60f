//! `grubl search`: runs one session and walks the cards on the terminal.

use std::io::Write;

use anyhow::Context;
use grubl_core::{AppConfig, FilterError, PriceLevel, SearchFilters, SearchRadius};
use grubl_session::{FlowState, Notice, SelectionFlow};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

use crate::open::open_link;
use crate::SearchArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Accept,
    Reject,
    Quit,
}

/// `y`/`yes`/`a` accepts, `n`/`no`/`r` rejects, `q`/`quit` quits.
pub(crate) fn parse_action(input: &str) -> Option<Action> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "a" | "accept" => Some(Action::Accept),
        "n" | "no" | "r" | "reject" => Some(Action::Reject),
        "q" | "quit" | "exit" => Some(Action::Quit),
        _ => None,
    }
}

/// Turns CLI input into validated filters. No `--type` means every type.
pub(crate) fn build_filters(
    location: &str,
    radius: u32,
    types: &[String],
    prices: &[PriceLevel],
    open_now: bool,
) -> Result<SearchFilters, FilterError> {
    let radius = SearchRadius::try_from(radius)?;
    let filters = if types.is_empty() {
        SearchFilters::with_all_types(location, radius)?
    } else {
        SearchFilters::new(location, radius, types)?
    };
    Ok(filters
        .with_price_levels(prices.iter().copied())
        .with_open_now(open_now))
}

fn print_notices(notices: &mut UnboundedReceiver<Notice>) {
    while let Ok(notice) = notices.try_recv() {
        println!("⚠  {notice}");
    }
}

pub(crate) async fn run(config: &AppConfig, args: SearchArgs) -> anyhow::Result<()> {
    let (tx, mut notices) = unbounded_channel();
    let flow = SelectionFlow::from_config(config, tx).context("failed to build places client")?;

    let location = match (args.location, args.near) {
        (Some(text), _) => text,
        (None, Some(coords)) => match flow.client().reverse_geocode(coords).await {
            Ok(address) => {
                println!("Using current location: {address}");
                address
            }
            Err(e) => {
                // The geocoder also accepts "lat,lng" as an address.
                tracing::warn!(error = %e, %coords, "reverse geocoding failed");
                println!("⚠  Could not determine address from location; searching by coordinates.");
                coords.to_string()
            }
        },
        (None, None) => anyhow::bail!("either --location or --near is required"),
    };

    let filters = build_filters(
        &location,
        args.radius,
        &args.types,
        &args.prices,
        args.open_now,
    )?;

    println!("Loading places near \"{location}\"...");
    flow.run_search(filters).await;
    print_notices(&mut notices);

    let state = flow.state().await;
    let Some(browse) = state.browse() else {
        return Ok(());
    };
    if browse.is_empty() {
        println!("No places found.");
        return Ok(());
    }

    if args.list {
        let total = browse.venues().len();
        for (i, card) in browse.cards().iter().enumerate() {
            println!("\n[{}/{total}]\n{card}", i + 1);
        }
        return Ok(());
    }

    browse_interactively(&flow, args.print_links).await
}

async fn browse_interactively(flow: &SelectionFlow, print_links: bool) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let state = flow.state().await;
        let FlowState::Browsing(browse) = &state else {
            return Ok(());
        };
        let Some(card) = browse.current_card() else {
            return Ok(());
        };

        println!(
            "\n[{}/{}]\n{card}",
            browse.cursor().index() + 1,
            browse.venues().len()
        );
        if browse.can_reject() {
            print!("(y) accept  (n) reject  (q) quit > ");
        } else {
            print!("(y) accept  (q) quit > ");
        }
        std::io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            return Ok(());
        };

        match parse_action(&line) {
            Some(Action::Accept) => {
                if let Some(link) = flow.accept().await {
                    open_link(&link, print_links).await;
                }
            }
            Some(Action::Reject) => {
                if !flow.reject().await {
                    println!("That was the last place.");
                }
            }
            Some(Action::Quit) => return Ok(()),
            None => println!("Type y, n or q."),
        }
    }
}
