//! # FixHub Dashboard Entry Point
//!
//! Starts a session from environment configuration, prints the dashboard
//! summary, the low stock alert and the purchase log, then shuts down.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (`FIXHUB_*` variables)
//! 3. Build the store
//! 4. Print the summary
//! 5. Shut down

use fixhub_core::TicketStatus;
use fixhub_dashboard::commands::{dashboard, inventory, purchases};
use fixhub_dashboard::state::ConfigState;
use fixhub_dashboard::{init_tracing, AppContext};

fn main() {
    init_tracing();

    let context = AppContext::start(ConfigState::from_env());
    let config = context.config();
    let stats = dashboard::get_dashboard(context.store());

    println!("{}", config.organization_name);
    println!("  Tickets:                  {}", stats.total_tickets);
    println!("  Pending:                  {}", stats.pending_tickets);
    println!("  Equipment in maintenance: {}", stats.equipment_in_maintenance);
    println!("  Low stock parts:          {}", stats.low_stock_parts);

    for status in TicketStatus::ALL {
        println!("    {:<12} {}", status.label(), stats.count_for(status));
    }

    for part in inventory::low_stock_parts(context.store()) {
        let value = part
            .stock_value
            .map(|v| config.format_currency(v))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  ! {} {}/{} {} ({})",
            part.name, part.quantity_available, part.quantity_minimum, part.unit, value
        );
    }

    for row in purchases::list_purchases(context.store(), None) {
        println!(
            "  {} {} x{} {} ({} each)",
            row.purchase_date,
            row.part_name,
            row.quantity,
            config.format_currency(row.total_price),
            config.format_unit_price(row.unit_price)
        );
    }

    context.shutdown();
}
