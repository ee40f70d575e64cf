use std::io;
use std::sync::OnceLock;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

static BAR: OnceLock<ProgressBar> = OnceLock::new();

/// The one progress bar of the process. Created hidden; the brute-force
/// phase makes it visible via [`activate`].
pub fn get() -> &'static ProgressBar {
    BAR.get_or_init(|| {
        let bar = ProgressBar::hidden();
        let style = ProgressStyle::with_template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
            .expect("static template")
            .progress_chars("=> ");
        bar.set_style(style);
        bar
    })
}

/// Makes the bar visible with the given length and caption.
pub fn activate(length: u64, message: &'static str) {
    let bar = get();
    bar.set_length(length);
    bar.set_message(message);
    bar.set_draw_target(ProgressDrawTarget::stderr());
}

/// `MakeWriter` target that prints above the bar while it is drawn and
/// falls back to plain stderr otherwise.
pub struct BarWriter;

impl io::Write for BarWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let msg = msg.trim_end();

        let bar = get();
        if bar.is_hidden() {
            eprintln!("{msg}");
        } else {
            bar.println(msg);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
