//! Prints the reference day: ruler ticks and positioned event blocks.
//!
//! Run with: cargo run -p dayview --example day_viewer

use dayview::prelude::*;

fn main() -> Result<()> {
    let params = ViewParams::DEFAULT;
    let events = vec![
        Event::new(30, 150)?,
        Event::new(540, 600)?,
        Event::new(560, 620)?,
        Event::new(610, 670)?,
    ];

    println!("time ruler:");
    for tick in ruler_ticks(&params) {
        // Only print the hour marks to keep the output short.
        if tick.minutes % 60 != 0 {
            continue;
        }
        println!("  {:>3} min  {} {}", tick.minutes, tick.label, tick.meridiem);
    }

    println!("event blocks:");
    for block in layout_panel(&params, &events)? {
        let pos = position_strings(&block.placement, &params);
        println!(
            "  {}  left {}  top {}  width {}  height {}",
            block.event, pos.left, pos.top, pos.width, pos.height
        );
    }

    Ok(())
}
