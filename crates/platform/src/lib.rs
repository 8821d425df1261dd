use app_api::UiApp;
use gfx::Renderer;
use std::sync::Arc;
use std::{thread, time::Duration};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};

pub use winit::error::EventLoopError;

enum UserEvent {
    Tick,
}

/// Open a window and drive `app` until it is closed.
///
/// A ticker thread requests a redraw about 60 times a second, so work an
/// app defers to "the next frame" always gets one.
pub fn run<A: UiApp>(app: A) -> Result<(), EventLoopError> {
    let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;
    let proxy = event_loop.create_proxy();

    let mut platform = PlatformApp {
        app,
        window: None,
        renderer: None,
        proxy: Some(proxy),
        ticker_started: false,
    };
    event_loop.run_app(&mut platform)
}

struct PlatformApp<A> {
    app: A,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    proxy: Option<EventLoopProxy<UserEvent>>,
    ticker_started: bool,
}

impl<A: UiApp> PlatformApp<A> {
    fn start_ticker(&mut self) {
        if self.ticker_started {
            return;
        }
        self.ticker_started = true;

        if let Some(proxy) = self.proxy.take() {
            thread::spawn(move || {
                let frame = Duration::from_millis(16); // ~60Hz
                while proxy.send_event(UserEvent::Tick).is_ok() {
                    thread::sleep(frame);
                }
            });
        }
    }
}

impl<A: UiApp> ApplicationHandler<UserEvent> for PlatformApp<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = match &self.window {
            Some(window) => Arc::clone(window),
            None => {
                let attributes = Window::default_attributes().with_title(self.app.title());
                match event_loop.create_window(attributes) {
                    Ok(window) => {
                        let window = Arc::new(window);
                        self.window = Some(Arc::clone(&window));
                        window
                    }
                    Err(e) => {
                        log::error!(target: "numfield.platform", "failed to create window: {e}");
                        event_loop.exit();
                        return;
                    }
                }
            }
        };

        self.start_ticker();

        if self.renderer.is_none() {
            match Renderer::new(window) {
                Ok(renderer) => self.renderer = Some(renderer),
                Err(e) => {
                    log::error!(target: "numfield.platform", "failed to set up rendering: {e}");
                    event_loop.exit();
                }
            }
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Tick => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let (Some(window), Some(renderer)) = (self.window.as_ref(), self.renderer.as_mut()) else {
            if matches!(event, WindowEvent::CloseRequested) {
                event_loop.exit();
            }
            return;
        };

        renderer.on_window_event(window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                renderer.resize(new_size);
            }
            WindowEvent::RedrawRequested => {
                let app = &mut self.app;
                renderer.render(window, |ctx| app.ui(ctx));
            }
            _ => {}
        }
    }
}
