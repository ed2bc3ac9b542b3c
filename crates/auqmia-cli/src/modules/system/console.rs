use auqmia_client::{Navigator, Notice, NoticeLevel, Notifier, Route};
use tracing::debug;

/// Terminal stand-in for the app's toasts and router.
///
/// Notices are printed to stdout. There is nowhere to navigate to, so routes
/// are only logged.
#[derive(Default)]
pub(crate) struct Console;

pub(crate) fn format_notice(notice: &Notice) -> String {
    let prefix = match notice.level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Failure => "error",
    };
    format!("{prefix}: {}", notice.message)
}

impl Notifier for Console {
    fn notify(&self, notice: Notice) {
        println!("{}", format_notice(&notice));
    }
}

impl Navigator for Console {
    fn navigate(&self, route: Route, replace: bool) {
        debug!(route = route.path(), replace, "navigate");
    }
}
