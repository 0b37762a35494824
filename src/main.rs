//! Scripted walk through the logistics service.
//!
//! 1. Registers two vehicles.
//! 2. Checks out a cart for Oleg and one for Ira.
//! 3. Tracks both orders, then shows a placement rejected for lack of vehicles.

use logistics_tracker::clients::LogisticsApi;
use logistics_tracker::lifecycle::{setup_tracing, LogisticsService, SystemConfig};
use logistics_tracker::model::{Cart, Item, OrderDraft};
use tracing::{error, info, warn, Instrument};

fn draft(cart: &mut Cart, user_name: &str, city: &str, postoffice: u32) -> OrderDraft {
    OrderDraft {
        user_name: user_name.to_string(),
        city: city.to_string(),
        postoffice,
        items: cart.take_items(),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting logistics demo");

    let service = LogisticsService::new(&config);
    let client = &service.client;

    for vehicle_no in [1, 2] {
        client.register_vehicle(vehicle_no).await.map_err(|e| e.to_string())?;
    }

    let mut cart = Cart::new();
    cart.add(Item::new("book", 110.0));
    cart.add(Item::new("chupachups", 44.0));
    info!(items = cart.len(), total = cart.total(), "Cart ready");

    let span = tracing::info_span!("checkout", user = "Oleg");
    let oleg = async { client.submit_order(draft(&mut cart, "Oleg", "Lviv", 53)).await }
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;
    info!("Your order number is {oleg}");

    cart.add(Item::new("tea", 35.5));
    let ira = client
        .submit_order(draft(&mut cart, "Ira", "Kyiv", 12))
        .await
        .map_err(|e| e.to_string())?;
    info!("Your order number is {ira}");

    match client.track_order(oleg).await {
        Ok(status) => info!("{status}"),
        Err(e) => error!(error = %e, "Tracking failed"),
    }

    for status in client.track_all().await.map_err(|e| e.to_string())? {
        info!("{status}");
    }

    // Both vehicles are busy now.
    cart.add(Item::new("umbrella", 420.0));
    if let Err(e) = client.submit_order(draft(&mut cart, "Taras", "Odesa", 7)).await {
        warn!(error = %e, "Order rejected");
    }

    let system = service.shutdown().await?;
    info!(
        orders = system.orders().len(),
        available = system.available_vehicles(),
        "Demo completed successfully"
    );
    Ok(())
}
