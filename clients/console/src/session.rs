use std::{io, str::FromStr};

use roster::{
    gateway::gateway::{send_action, GatewayResult, PersonGateway},
    model::action::{Action, ActionResult},
    view::{
        admin::{PersonAdmin, ViewError},
        render::{render_form, render_notification, render_table},
    },
};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::commands::{Command, HELP};

/// Outcome of a request, sent back to the event loop by the task that ran it
#[derive(Debug)]
pub struct Completion {
    pub action: Action,
    pub result: GatewayResult<ActionResult>,
}

#[derive(Debug, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Drives a [`PersonAdmin`] from console input.
///
/// Requests run as spawned tasks and report back over a channel, so input is
/// still handled while they are in flight. There is no cancellation and no
/// de-duplication: completions are applied in the order they arrive.
pub struct Session<G, W> {
    admin: PersonAdmin,
    gateway: G,
    output: W,
    completion_sender: flume::Sender<Completion>,
    completion_receiver: flume::Receiver<Completion>,
    in_flight: usize,
}

impl<G, W> Session<G, W>
where
    G: PersonGateway + Clone + 'static,
    W: AsyncWrite + Unpin,
{
    pub fn new(gateway: G, output: W) -> Self {
        let (completion_sender, completion_receiver) = flume::unbounded::<Completion>();

        Self {
            admin: PersonAdmin::new(),
            gateway,
            output,
            completion_sender,
            completion_receiver,
            in_flight: 0,
        }
    }

    pub fn admin(&self) -> &PersonAdmin {
        &self.admin
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Mounts the view: applies the initial search and issues the first load.
    /// Fails without loading if the search is refused.
    pub async fn start(&mut self, search: Option<&str>) -> io::Result<()> {
        if let Some(search) = search {
            self.admin
                .set_search(search)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        }

        let action = self.admin.mount();
        self.dispatch(action);

        self.write_table().await
    }

    /// Runs until `quit` or until `input` is closed, then waits for the
    /// outstanding requests
    pub async fn run(&mut self, input: flume::Receiver<String>) -> io::Result<()> {
        let completions = self.completion_receiver.clone();

        loop {
            tokio::select! {
                biased;

                Ok(completion) = completions.recv_async() => {
                    self.apply(completion).await?;
                }
                line = input.recv_async() => match line {
                    Ok(line) => {
                        if self.handle_line(&line).await? == Flow::Quit {
                            break;
                        }
                    }
                    Err(flume::RecvError::Disconnected) => break,
                },
            }
        }

        self.settle().await
    }

    /// Applies completions until nothing is in flight
    pub async fn settle(&mut self) -> io::Result<()> {
        if self.in_flight > 0 {
            log::info!("Waiting for {} outstanding request(s)", self.in_flight);
        }

        while self.in_flight > 0 {
            match self.completion_receiver.recv_async().await {
                Ok(completion) => self.apply(completion).await?,
                // Sender lives in self, cannot happen
                Err(_) => break,
            }
        }

        Ok(())
    }

    pub async fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match Command::from_str(line) {
            Ok(command) => command,
            Err(e) => {
                self.say(&e.to_string()).await?;
                return Ok(Flow::Continue);
            }
        };

        log::debug!("Command: {:?}", command);

        // A pending delete confirmation blocks everything but the answer
        let blocked = self.admin.confirmation().is_pending()
            && !matches!(command, Command::Answer(_) | Command::Help | Command::Quit);

        if blocked {
            self.say(&ViewError::ConfirmationPending.to_string()).await?;
            return Ok(Flow::Continue);
        }

        match self.handle_command(command).await {
            Ok(flow) => Ok(flow),
            Err(HandleError::View(e)) => {
                self.say(&e.to_string()).await?;
                Ok(Flow::Continue)
            }
            Err(HandleError::Io(e)) => Err(e),
        }
    }

    async fn handle_command(&mut self, command: Command) -> Result<Flow, HandleError> {
        match command {
            Command::List => self.write_table().await?,
            Command::Search(search) => {
                self.admin.set_search(&search)?;
                self.write_table().await?;
            }
            Command::Reload => {
                let action = self.admin.reload();
                self.dispatch(action);
                self.write_table().await?;
            }
            Command::Show(id) => {
                let action = self.admin.show(id)?;
                self.dispatch(action);
            }
            Command::Add => {
                self.admin.open_create()?;
                self.write_form().await?;
            }
            Command::Edit(id) => {
                self.admin.open_edit(id)?;
                self.write_form().await?;
            }
            Command::Set(field, value) => {
                self.admin.set_field(field, &value)?;
                self.write_form().await?;
            }
            Command::Save => {
                let action = self.admin.submit()?;
                self.dispatch(action);
                self.write_form().await?;
            }
            Command::Cancel => {
                self.admin.cancel_form()?;
                self.write_table().await?;
            }
            Command::Delete(id) => {
                let prompt = self.admin.request_delete(id)?;
                self.say(&format!("{} (yes / no)", prompt)).await?;
            }
            Command::Answer(confirmed) => match self.admin.answer_confirmation(confirmed)? {
                Some(action) => self.dispatch(action),
                None => self.say("Delete cancelled.").await?,
            },
            Command::Help => self.say(HELP).await?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn dispatch(&mut self, action: Action) {
        let gateway = self.gateway.clone();
        let sender = self.completion_sender.clone();

        self.in_flight += 1;

        tokio::spawn(async move {
            let result = send_action(&gateway, action.clone()).await;

            // Receiver is only gone once the session is dropped
            let _ = sender.send(Completion { action, result });
        });
    }

    async fn apply(&mut self, completion: Completion) -> io::Result<()> {
        self.in_flight = self.in_flight.saturating_sub(1);

        let Completion { action, result } = completion;

        let fetched = match &result {
            Ok(ActionResult::Single(person)) if matches!(action, Action::Fetch(_)) => {
                Some(person.clone())
            }
            _ => None,
        };

        let succeeded = result.is_ok();

        if let Some(notification) = self.admin.complete(&action, result) {
            self.say(&render_notification(&notification)).await?;
        }

        if let Some(person) = fetched {
            self.say(&format!("{:#?}", person)).await?;
        }

        match action {
            Action::List => self.write_table().await?,
            Action::Create(_) | Action::Update(_, _) if succeeded => self.write_table().await?,
            // Dialog stays open with its draft after a failed save
            Action::Create(_) | Action::Update(_, _) => self.write_form().await?,
            Action::Delete(_) if succeeded => self.write_table().await?,
            Action::Delete(_) | Action::Fetch(_) => {}
        }

        Ok(())
    }

    async fn write_table(&mut self) -> io::Result<()> {
        let table = render_table(self.admin.list());
        self.write(&table).await
    }

    async fn write_form(&mut self) -> io::Result<()> {
        let form = render_form(self.admin.form());
        self.write(&form).await
    }

    async fn say(&mut self, message: &str) -> io::Result<()> {
        self.write(&format!("{}\n", message)).await
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }
}

#[derive(Debug)]
enum HandleError {
    View(ViewError),
    Io(io::Error),
}

impl From<ViewError> for HandleError {
    fn from(e: ViewError) -> Self {
        HandleError::View(e)
    }
}

impl From<io::Error> for HandleError {
    fn from(e: io::Error) -> Self {
        HandleError::Io(e)
    }
}
