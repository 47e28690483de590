use std::sync::{mpsc, Arc};
use std::thread;

use crate::client::{ClientSettings, CompletionClient, ReqwestCompletionClient};
use crate::interpret::{self, InterpretError};
use crate::{Analysis, AnalysisFailure, EngineEvent, FailureKind, RequestId};

enum EngineCommand {
    Analyze {
        request_id: RequestId,
        title: String,
        description: String,
    },
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(ReqwestCompletionClient::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn analyze(
        &self,
        request_id: RequestId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::Analyze {
            request_id,
            title: title.into(),
            description: description.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn CompletionClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Analyze {
            request_id,
            title,
            description,
        } => {
            let result = run_analysis(client, request_id, &title, &description).await;
            let _ = event_tx.send(EngineEvent::AnalysisCompleted { request_id, result });
        }
    }
}

async fn run_analysis(
    client: &dyn CompletionClient,
    request_id: RequestId,
    title: &str,
    description: &str,
) -> Result<Analysis, AnalysisFailure> {
    let reply = client.complete(request_id, title, description).await?;
    interpret::parse_analysis(&reply).map_err(|err| {
        if let InterpretError::Parse { text, .. } = &err {
            log::warn!("request {request_id}: discarding unparseable reply: {text:?}");
        }
        AnalysisFailure::from(err)
    })
}

impl From<InterpretError> for AnalysisFailure {
    fn from(err: InterpretError) -> Self {
        let kind = match err {
            InterpretError::Parse { .. } => FailureKind::Parse,
            InterpretError::Shape { .. } => FailureKind::Shape,
        };
        AnalysisFailure::new(kind, err.to_string())
    }
}
