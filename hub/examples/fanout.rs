use std::time::Duration;

use crossbeam::channel::unbounded;
use log::LevelFilter;
use rusty_hub::{Hub, HubConfig, HubError, Payload, callable, logging::ChannelLogger};

#[derive(Debug, Clone)]
struct Order {
    id: u32,
    total_cents: u64,
}

fn main() -> Result<(), HubError> {
    let (logger, records) = ChannelLogger::with_receiver(LevelFilter::Debug);
    if logger.install().is_err() {
        eprintln!("a logger is already installed");
    }

    let hub = Hub::with_config(HubConfig::default().with_thread_name("fanout"))?;
    let (done, finished) = unbounded::<String>();

    let billing = done.clone();
    hub.register("order", move |order: Order| {
        billing
            .send(format!("billing charged {} cents for #{}", order.total_cents, order.id))
            .unwrap();
    })?;

    let shipping = done.clone();
    hub.handle(
        "order",
        callable(move |order: Order| {
            shipping
                .send(format!("shipping queued #{}", order.id))
                .unwrap();
        }),
    )?;

    let audit = done.clone();
    hub.register("order", move |payload: Payload| {
        audit
            .send(format!("audit saw a {}", payload.type_name()))
            .unwrap();
    })?;

    if let Err(err) = hub.handle("order", "not a handler") {
        println!("rejected: {err}");
    }

    let mut expected = hub.send(
        "order",
        Order {
            id: 7,
            total_cents: 1999,
        },
    )?;
    expected += hub.send("order", String::from("manual adjustment"))?;

    if let Err(err) = hub.send("refund", 7_u32) {
        println!("rejected: {err}");
    }

    for _ in 0..expected {
        match finished.recv_timeout(Duration::from_secs(5)) {
            Ok(line) => println!("{line}"),
            Err(_) => break,
        }
    }

    for record in records.try_iter() {
        println!("[{}] {}", record.level, record.message);
    }

    Ok(())
}
