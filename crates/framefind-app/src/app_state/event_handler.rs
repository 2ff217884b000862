//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::bounds::window_bounds;
use super::core::FrameFindApp;
use super::find_keys::{classify, KeyAction};

impl ApplicationHandler for FrameFindApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_webview_bounds(size.width, size.height);
                }
            }

            // A deactivated window cannot keep the page focused; hand focus
            // back so suppression is released.
            WindowEvent::Focused(false) => {
                self.release_page_focus();
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl FrameFindApp {
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        let Some(action) = classify(&event.logical_key, self.modifiers) else {
            return;
        };

        if action.is_menu_shortcut() && self.menu_shortcuts_ignored() {
            tracing::debug!(?action, "menu shortcut skipped while page has focus");
            return;
        }

        self.perform(action);
    }

    fn perform(&mut self, action: KeyAction) {
        match action {
            KeyAction::FindNext | KeyAction::FindPrevious => {
                let Some(query) = self.current_query() else {
                    tracing::debug!("nothing to search for");
                    return;
                };
                if let Some(surface) = self.surface.as_mut() {
                    let outcome = surface
                        .find_mut()
                        .find(&query, action == KeyAction::FindPrevious);
                    tracing::debug!(?outcome, "find");
                }
            }
            KeyAction::StopFind => {
                if let Some(surface) = self.surface.as_mut() {
                    let outcome = surface.find_mut().stop_find(None);
                    tracing::debug!(?outcome, "stop find");
                }
            }
            KeyAction::FocusPage => {
                self.focus_page();
            }
            KeyAction::Reload => {
                let handle = self
                    .webviews
                    .as_ref()
                    .and_then(|registry| registry.get(&self.surface_id));
                if let Some(handle) = handle {
                    if let Err(e) = handle.evaluate_script("window.location.reload();") {
                        tracing::warn!(error = %e, "reload failed");
                    }
                }
            }
            KeyAction::Quit => {
                self.should_exit = true;
            }
        }
    }

    /// Give the page keyboard focus. Reported to the surface as a
    /// chrome focus change.
    fn focus_page(&self) {
        if let Some(registry) = &self.webviews {
            if let Err(e) = registry.focus(&self.surface_id) {
                tracing::warn!(error = %e, "Failed to focus webview");
            }
        }
    }

    /// Return keyboard focus to the host window.
    fn release_page_focus(&self) {
        if let Some(registry) = &self.webviews {
            if let Err(e) = registry.focus_parent(&self.surface_id) {
                tracing::warn!(error = %e, "Failed to release webview focus");
            }
        }
    }

    fn sync_webview_bounds(&self, width: u32, height: u32) {
        let handle = self
            .webviews
            .as_ref()
            .and_then(|registry| registry.get(&self.surface_id));
        if let Some(handle) = handle {
            if let Err(e) = handle.set_bounds(window_bounds(width, height)) {
                tracing::warn!(error = %e, "Failed to resize webview");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use framefind_config::FrameFindConfig;

    fn app() -> FrameFindApp {
        FrameFindApp::new(FrameFindConfig::default(), Args::default())
    }

    #[test]
    fn focus_changes_without_webview_do_nothing() {
        let app = app();
        app.focus_page();
        app.release_page_focus();
        assert!(app.surface.is_none());
    }

    #[test]
    fn quit_sets_exit_flag() {
        let mut app = app();
        app.perform(KeyAction::Quit);
        assert!(app.should_exit);
    }

    #[test]
    fn find_keys_without_a_query_are_ignored() {
        let mut app = app();
        app.perform(KeyAction::FindNext);
        app.perform(KeyAction::StopFind);
        assert!(!app.should_exit);
        assert!(app.current_query().is_none());
    }
}
