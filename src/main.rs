use cart_store::view::CartView;
use cart_store::{open_file_store, CartConfig, HydrateOutcome};
use dotenvy::dotenv;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = CartConfig::from_env()?;
    let (store, outcome) = open_file_store(&config);

    match outcome {
        HydrateOutcome::Fresh => log::info!("No saved cart, starting empty"),
        HydrateOutcome::Restored { line_items } => {
            log::info!("Restored cart with {} line items", line_items)
        }
        HydrateOutcome::Discarded => log::warn!("Saved cart was unreadable and has been ignored"),
        HydrateOutcome::Unavailable => log::warn!("Cart storage unavailable"),
    }

    let view = CartView::from_cart(store.cart(), &config.currency_symbol);
    for line in &view.lines {
        log::info!("{} ({}) {}", line.name, line.id, line.price_label);
    }
    log::info!("Total Items: {}", view.item_count);
    log::info!("Total Amount: {}", view.total_label);

    Ok(())
}
