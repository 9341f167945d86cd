use crate::application_ports::Locator;
use poise::serenity_prelude as serenity;
use poise::serenity_prelude::{ClientBuilder, ComponentInteractionDataKind, GuildId, Interaction};
use tracing::{info, warn};

pub mod commands;
mod components;
mod response;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a, D> = poise::Context<'a, D, Error>;

pub async fn run_bot<L: Locator + Send + Sync + 'static>(
    locator: L,
    token: String,
    intents: serenity::GatewayIntents,
    guild: GuildId,
) -> Result<(), Error> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::enabled_commands(),
            event_handler: |ctx, event, framework, locator| {
                Box::pin(event_handler(ctx, event, framework, locator))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_in_guild(ctx, &framework.options().commands, guild)
                    .await?;

                // Historical messages are unroutable until reattachment has
                // run, so it must complete before the bot serves interactions.
                let report = locator.get_reattachment_port().reattach().await?;
                info!(
                    buttons = report.buttons,
                    selectors = report.selectors,
                    skipped = report.skipped,
                    "Persistent components reattached, bot is ready"
                );

                Ok(locator)
            })
        })
        .build();

    let client = ClientBuilder::new(token, intents)
        .framework(framework)
        .await;
    client.unwrap().start().await?;

    Ok(())
}

async fn event_handler<L: Locator>(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, L, Error>,
    locator: &L,
) -> Result<(), Error> {
    if let serenity::FullEvent::InteractionCreate {
        interaction: Interaction::Component(component_interaction),
    } = event
    {
        match &component_interaction.data.kind {
            ComponentInteractionDataKind::Button => {
                components::autorole_button::handle_button_press(
                    ctx,
                    component_interaction,
                    locator,
                )
                .await?
            }
            ComponentInteractionDataKind::StringSelect { values } => {
                components::role_selector::handle_selection(
                    ctx,
                    component_interaction,
                    values,
                    locator,
                )
                .await?
            }
            _ => {}
        }
    }

    Ok(())
}

async fn on_error<L: Locator>(error: poise::FrameworkError<'_, L, Error>) {
    match error {
        poise::FrameworkError::MissingUserPermissions { ctx, .. } => {
            if let Err(err) = ctx.send(response::permission_denied::administrator_required()).await
            {
                warn!(error = ?err, "Failed to report a permission error");
            }
        }
        error => {
            if let Err(err) = poise::builtins::on_error(error).await {
                warn!(error = ?err, "Failed to handle a framework error");
            }
        }
    }
}
