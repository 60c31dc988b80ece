//! Filters a fixed list of cards by cost and version and prints the survivors.

use metafilter::{scan, Card, CostFilter, MetaFilter, VersionFilter};

fn sample_cards() -> Vec<Card> {
    vec![
        //         ID  NAME     COST   VER  LEADER
        Card::new(0, "Card1", 30.0, 1, 0),
        Card::new(1, "Card2", 10.0, 1, 0),
        Card::new(2, "Card3", 12.5, 1, 1),
        Card::new(3, "Card4", 100.0, 1, 1),
        Card::new(4, "Card5", 45.0, 2, 1),
    ]
}

/// Cost in `(0, 50)` and version 1 or 3.
fn demo_filter() -> anyhow::Result<MetaFilter<(CostFilter, VersionFilter)>> {
    let cost = CostFilter::try_between(0.0, 50.0)?;
    let versions: VersionFilter = "1,3".parse()?;
    Ok(MetaFilter::new((cost, versions)))
}

fn main() -> anyhow::Result<()> {
    let cards = sample_cards();
    let filter = demo_filter()?;

    let mut filtered = Vec::new();
    scan::filter_into(&cards, &filter, &mut filtered);

    println!("These are the filtered cards:");
    for card in filtered {
        println!("{card}");
    }

    Ok(())
}
