use crate::prompt::CancelFlag;

/// Listen for Ctrl-C for the rest of the process and raise `flag` on each.
///
/// Once installed, an interrupt no longer kills the process; the prompt that
/// is waiting for input returns as cancelled after the next Enter.
pub fn install(flag: CancelFlag) {
    tokio::spawn(async move {
        loop {
            if let Err(error) = tokio::signal::ctrl_c().await {
                tracing::warn!(%error, "failed to listen for interrupts; Ctrl-C will terminate");
                return;
            }
            tracing::debug!("interrupt received");
            flag.raise();
            eprintln!("\n(interrupted: press Enter to return to the menu)");
        }
    });
}
