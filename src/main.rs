#![windows_subsystem = "windows"]
slint::include_modules!();

use std::sync::Arc;

use anyhow::Context;
use github_profile_lookup::avatar::{download_avatar, AvatarPixels, AVATAR_TIMEOUT};
use github_profile_lookup::theme::{Rgb, PALETTE};
use github_profile_lookup::{
    logging, AppConfig, GitHubClient, LookupController, LookupState, SystemLinkOpener,
};

type Controller = LookupController<GitHubClient, SystemLinkOpener>;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Invalid configuration")?;
    logging::init(config.log_level.as_deref());

    // Shared HTTP client
    let github = GitHubClient::new(&config)?;
    let controller: Arc<Controller> =
        Arc::new(LookupController::new(github.clone(), SystemLinkOpener));

    // Background tokio runtime for async HTTP
    let rt = Arc::new(
        tokio::runtime::Runtime::new().context("Failed to start the async runtime")?,
    );

    let app = AppWindow::new()?;
    apply_palette(&app);

    // =============================================
    //  CALLBACK: query-edited
    // =============================================
    {
        let controller = controller.clone();
        app.on_query_edited(move |text| controller.set_query(text.as_str()));
    }

    // =============================================
    //  CALLBACK: lookup-requested
    // =============================================
    {
        let app_weak = app.as_weak();
        let controller = controller.clone();
        let rt = rt.clone();
        let avatar_size = config.avatar_size;

        app.on_lookup_requested(move || {
            let query = controller.query();
            let pending = controller.begin_lookup(&query);

            if let Some(app) = app_weak.upgrade() {
                app.set_query(controller.query().into());
                render(&app, &controller.state());
            }

            let Some(pending) = pending else { return };

            let app_weak = app_weak.clone();
            let controller = controller.clone();
            let github = github.clone();

            rt.spawn(async move {
                let Some(state) = controller.resolve(pending).await else {
                    return;
                };

                // Show the result straight away; the avatar follows on its own.
                {
                    let app_weak = app_weak.clone();
                    let controller = controller.clone();
                    let state = state.clone();
                    dispatch_to_ui(move || {
                        if controller.state() != state {
                            return;
                        }
                        if let Some(app) = app_weak.upgrade() {
                            render(&app, &state);
                        }
                    });
                }

                let Some(profile) = state.profile() else { return };
                let Some(pixels) =
                    download_avatar(github.http(), &profile.avatar_url, avatar_size, AVATAR_TIMEOUT)
                        .await
                else {
                    return;
                };

                dispatch_to_ui(move || {
                    // A newer lookup may have started while the avatar loaded.
                    if controller.state() != state {
                        return;
                    }
                    if let Some(app) = app_weak.upgrade() {
                        app.set_avatar(to_image(&pixels));
                    }
                });
            });
        });
    }

    // =============================================
    //  CALLBACK: profile-clicked
    // =============================================
    {
        let controller = controller.clone();
        app.on_profile_clicked(move || {
            controller.open_current_profile_link();
        });
    }

    // Run the Slint event loop
    app.run()?;

    Ok(())
}

/// Runs `f` on the slint event loop. Work queued after the window has closed
/// is dropped.
fn dispatch_to_ui(f: impl FnOnce() + Send + 'static) {
    if let Err(e) = slint::invoke_from_event_loop(f) {
        tracing::debug!(error = %e, "Event loop gone; dropping UI update");
    }
}

/// Pushes a lookup state into the window's properties.
fn render(app: &AppWindow, state: &LookupState) {
    app.set_is_loading(state.is_loading());
    app.set_error_message(state.error_message().unwrap_or_default().into());

    match state.profile() {
        Some(profile) => {
            app.set_display_name(profile.display_name.as_deref().unwrap_or_default().into());
            app.set_login_name(profile.login.as_str().into());
            app.set_bio(profile.bio.as_deref().unwrap_or_default().into());
            app.set_has_profile(true);
        }
        None => {
            app.set_has_profile(false);
            app.set_display_name("".into());
            app.set_login_name("".into());
            app.set_bio("".into());
            app.set_avatar(slint::Image::default());
        }
    }
}

fn to_image(pixels: &AvatarPixels) -> slint::Image {
    let buf = slint::SharedPixelBuffer::<slint::Rgba8Pixel>::clone_from_slice(
        &pixels.rgba,
        pixels.width,
        pixels.height,
    );
    slint::Image::from_rgba8(buf)
}

fn apply_palette(app: &AppWindow) {
    let palette = app.global::<Palette>();
    palette.set_background(to_color(PALETTE.background));
    palette.set_font(to_color(PALETTE.font));
    palette.set_dark_font(to_color(PALETTE.dark_font));
}

fn to_color(Rgb(r, g, b): Rgb) -> slint::Color {
    slint::Color::from_rgb_u8(r, g, b)
}
