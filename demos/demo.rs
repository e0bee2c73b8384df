//! Verification example for the nowmail client.

use nowmail::{Client, split_address};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Client::new()?;

    let mailboxes = client.generate_random_mailbox(1).await?;
    let address = &mailboxes[0];
    let (login, domain) = split_address(address).expect("provider returned malformed address");
    println!("Created temporary mailbox: {address}");

    // Poll for messages for up to 2 minutes
    println!("Polling for messages (2 min max)... Send an email to: {address}");
    let start = std::time::Instant::now();
    let timeout = std::time::Duration::from_secs(120);

    loop {
        let messages = client.check_mailbox(login, domain).await?;

        if !messages.is_empty() {
            println!("Messages in inbox: {}", messages.len());
            for msg in &messages {
                println!("  - From: {}, Subject: {}", msg.from, msg.subject);
            }
            if let Some(detail) = client.fetch_message(login, domain, messages[0].id).await? {
                println!("First message body:\n{}", detail.text_body);
            }
            break;
        }

        if start.elapsed() >= timeout {
            println!("Timeout: no messages received after 2 minutes");
            break;
        }

        tokio::time::sleep(std::time::Duration::from_secs(5)).await;
    }

    client.close().await;
    Ok(())
}
