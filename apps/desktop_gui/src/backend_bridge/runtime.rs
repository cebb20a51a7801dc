//! Backend worker: owns the tokio runtime, the chat collaborator, and image I/O.

use std::{path::PathBuf, sync::Arc, thread};

use client_core::{
    chat, ChatCollaborator, GeminiClient, ImageRequest, MissingChatCollaborator,
};
use crossbeam_channel::{Receiver, Sender};
use reqwest::Client as HttpClient;

use crate::{
    backend_bridge::commands::BackendCommand,
    config::Settings,
    controller::events::{UiError, UiErrorContext, UiEvent},
    media::{decode_preview_image, is_remote_location, local_asset_path},
};

#[derive(Clone)]
struct Worker {
    collaborator: Arc<dyn ChatCollaborator>,
    http: HttpClient,
    assets_dir: PathBuf,
    ui_tx: Sender<UiEvent>,
}

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: Settings) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let http = HttpClient::new();
            let worker = Worker {
                collaborator: build_collaborator(&settings, &http, &ui_tx),
                http,
                assets_dir: settings.assets_dir.clone(),
                ui_tx,
            };
            let _ = worker
                .ui_tx
                .try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "backend command received");
                let worker = worker.clone();
                tokio::spawn(async move { worker.handle(cmd).await });
            }
            tracing::info!("ui command queue closed; backend worker stopping");
        });
    });
}

fn build_collaborator(
    settings: &Settings,
    http: &HttpClient,
    ui_tx: &Sender<UiEvent>,
) -> Arc<dyn ChatCollaborator> {
    let Some(config) = settings.gemini_config() else {
        tracing::warn!("no Gemini API key configured; assistant replies will be unavailable");
        return Arc::new(MissingChatCollaborator);
    };

    match GeminiClient::with_http(http.clone(), config) {
        Ok(client) => {
            tracing::info!(model = client.model(), "assistant collaborator ready");
            Arc::new(client)
        }
        Err(err) => {
            tracing::error!("assistant collaborator unavailable: {err}");
            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                err.to_string(),
            )));
            Arc::new(MissingChatCollaborator)
        }
    }
}

impl Worker {
    async fn handle(&self, cmd: BackendCommand) {
        match cmd {
            BackendCommand::AskAssistant { ticket } => {
                let reply = chat::exchange(self.collaborator.as_ref(), &ticket).await;
                // Replies clear the in-flight flag, so they must not be dropped.
                if self
                    .ui_tx
                    .send(UiEvent::AssistantReplied {
                        ticket_id: ticket.id,
                        reply,
                    })
                    .is_err()
                {
                    tracing::warn!(ticket = ticket.id, "ui event queue closed before reply");
                }
            }
            BackendCommand::FetchImage { request } => {
                let event = match self.load_image(&request).await {
                    Ok(image) => UiEvent::ImageLoaded {
                        destination: request.destination,
                        source: request.source,
                        image,
                    },
                    Err(reason) => {
                        tracing::debug!(
                            destination = %request.destination,
                            location = request.location,
                            "image load failed: {reason}"
                        );
                        UiEvent::ImageFailed {
                            destination: request.destination,
                            source: request.source,
                            reason,
                        }
                    }
                };
                if self.ui_tx.send(event).is_err() {
                    tracing::warn!("ui event queue closed before image result");
                }
            }
        }
    }

    async fn load_image(
        &self,
        request: &ImageRequest,
    ) -> Result<crate::media::PreviewImage, String> {
        let bytes = if is_remote_location(request.location) {
            self.http
                .get(request.location)
                .send()
                .await
                .and_then(|response| response.error_for_status())
                .map_err(|err| err.to_string())?
                .bytes()
                .await
                .map_err(|err| err.to_string())?
                .to_vec()
        } else {
            let path = local_asset_path(&self.assets_dir, request.location);
            tokio::fs::read(&path)
                .await
                .map_err(|err| format!("failed to read '{}': {err}", path.display()))?
        };
        decode_preview_image(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;
    use client_core::{chat::UNAVAILABLE_REPLY, ChatTicket};
    use crossbeam_channel::bounded;
    use shared::domain::{DestinationId, ImageSource};

    fn temp_assets_dir() -> PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("timetravel_assets_test_{suffix}"));
        std::fs::create_dir_all(&dir).expect("assets dir");
        dir
    }

    fn worker(assets_dir: PathBuf) -> (Worker, Receiver<UiEvent>) {
        let (ui_tx, ui_rx) = bounded(8);
        let worker = Worker {
            collaborator: Arc::new(MissingChatCollaborator),
            http: HttpClient::new(),
            assets_dir,
            ui_tx,
        };
        (worker, ui_rx)
    }

    #[tokio::test]
    async fn assistant_without_credentials_replies_unavailable() {
        let (worker, ui_rx) = worker(PathBuf::from("assets"));
        worker
            .handle(BackendCommand::AskAssistant {
                ticket: ChatTicket {
                    id: 7,
                    prompt: chat::compose_prompt("Bonjour"),
                },
            })
            .await;

        match ui_rx.try_recv().expect("reply event") {
            UiEvent::AssistantReplied { ticket_id, reply } => {
                assert_eq!(ticket_id, 7);
                assert_eq!(reply, UNAVAILABLE_REPLY);
            }
            _ => panic!("expected an assistant reply"),
        }
    }

    #[tokio::test]
    async fn local_artwork_is_read_from_assets_dir() {
        let dir = temp_assets_dir();
        let image = image::RgbaImage::from_pixel(4, 4, image::Rgba([16, 185, 129, 255]));
        image
            .save(dir.join("cretace_hero_16_9.png"))
            .expect("write png");

        let (worker, ui_rx) = worker(dir.clone());
        worker
            .handle(BackendCommand::FetchImage {
                request: ImageRequest {
                    destination: DestinationId::Cretace,
                    source: ImageSource::Primary,
                    location: "/cretace_hero_16_9.png",
                },
            })
            .await;

        match ui_rx.try_recv().expect("image event") {
            UiEvent::ImageLoaded {
                destination,
                source,
                image,
            } => {
                assert_eq!(destination, DestinationId::Cretace);
                assert_eq!(source, ImageSource::Primary);
                assert_eq!((image.width, image.height), (4, 4));
            }
            _ => panic!("expected a loaded image"),
        }
        std::fs::remove_dir_all(dir).expect("cleanup");
    }

    #[tokio::test]
    async fn missing_artwork_reports_failure_for_the_same_source() {
        let dir = temp_assets_dir();
        let (worker, ui_rx) = worker(dir.clone());
        worker
            .handle(BackendCommand::FetchImage {
                request: ImageRequest {
                    destination: DestinationId::Paris1889,
                    source: ImageSource::Primary,
                    location: "paris1889_hero_16_9.png",
                },
            })
            .await;

        match ui_rx.try_recv().expect("image event") {
            UiEvent::ImageFailed {
                destination,
                source,
                reason,
            } => {
                assert_eq!(destination, DestinationId::Paris1889);
                assert_eq!(source, ImageSource::Primary);
                assert!(reason.contains("paris1889_hero_16_9.png"));
            }
            _ => panic!("expected an image failure"),
        }
        std::fs::remove_dir_all(dir).expect("cleanup");
    }
}
