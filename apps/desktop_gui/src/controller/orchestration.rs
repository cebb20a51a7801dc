//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::events::{UiError, UiErrorContext},
};

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), UiError> {
    let cmd_name = cmd.name();
    let context = match &cmd {
        BackendCommand::AskAssistant { .. } => UiErrorContext::Chat,
        BackendCommand::FetchImage { .. } => UiErrorContext::ImageLoad,
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err(UiError::from_message(
                context,
                "UI command queue is full; please retry",
            ))
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            Err(UiError::from_message(
                context,
                "Backend command processor disconnected (possible startup/runtime failure)",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::UiErrorCategory;
    use client_core::ChatTicket;
    use crossbeam_channel::bounded;

    fn ask(id: u64) -> BackendCommand {
        BackendCommand::AskAssistant {
            ticket: ChatTicket {
                id,
                prompt: "System: x\nUser: y".to_string(),
            },
        }
    }

    #[test]
    fn queues_commands_while_there_is_room() {
        let (tx, rx) = bounded(1);
        dispatch_backend_command(&tx, ask(1)).expect("queued");
        assert_eq!(rx.try_recv().ok(), Some(ask(1)));
    }

    #[test]
    fn reports_full_and_disconnected_queues_as_transport_errors() {
        let (tx, rx) = bounded(1);
        dispatch_backend_command(&tx, ask(1)).expect("queued");

        let full = dispatch_backend_command(&tx, ask(2)).expect_err("queue full");
        assert_eq!(full.category(), UiErrorCategory::Transport);
        assert_eq!(full.context(), UiErrorContext::Chat);

        drop(rx);
        let gone = dispatch_backend_command(&tx, ask(3)).expect_err("disconnected");
        assert_eq!(gone.category(), UiErrorCategory::Transport);
    }
}
