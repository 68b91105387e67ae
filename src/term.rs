//! Best-effort console setup for UTF-8 output.
//!
//! Legacy Windows consoles default to an OEM code page that mangles anything
//! outside ASCII. None of this is a hard dependency: a console that cannot be
//! switched must not prevent the analyzer from running.

/// Locale names tried in order; the first one the C runtime accepts wins.
#[cfg(windows)]
const LOCALE_CANDIDATES: [&str; 2] = ["en_US.UTF-8", "C.UTF-8"];

/// Switches the console code pages and the process locale to UTF-8.
///
/// Every step is best-effort and failures are ignored. On non-Windows targets
/// this is a no-op.
pub fn prepare() {
    #[cfg(windows)]
    {
        use std::ffi::CString;

        use windows_sys::Win32::Globalization::CP_UTF8;
        use windows_sys::Win32::System::Console::{SetConsoleCP, SetConsoleOutputCP};

        // SAFETY: both functions only take a code page identifier.
        unsafe {
            SetConsoleCP(CP_UTF8);
            SetConsoleOutputCP(CP_UTF8);
        }

        for name in LOCALE_CANDIDATES {
            let Ok(locale) = CString::new(name) else {
                continue;
            };
            // SAFETY: `locale` is a valid NUL-terminated string, and the
            // returned pointer is only checked for NULL.
            if !unsafe { libc::setlocale(libc::LC_ALL, locale.as_ptr()) }.is_null() {
                break;
            }
        }
    }
}
