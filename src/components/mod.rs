mod app;
mod control_panel;
mod portal_overlay;
mod reactor_view;

pub use app::App;
pub use control_panel::ControlPanel;
pub use portal_overlay::PortalOverlay;
pub use reactor_view::ReactorView;
