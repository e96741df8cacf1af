use reportdir_core::ReportPaths;
use termimad::{
    MadSkin,
    crossterm::style::{Attribute, Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Green);
        skin.bold.add_attr(Attribute::Bold);
        Self { skin, opts }
    }

    /// Prints the confirmation block followed by the ready line with the base path.
    pub fn print_report(&self, paths: &ReportPaths) {
        if self.opts.use_color {
            let ok = "[OK]".with(Color::Green);
            println!("{ok} Created report structure:");
            println!("   Base: {}", paths.base.display().to_string().with(Color::Cyan));
            println!("   Data: {}", paths.data.display().to_string().with(Color::Blue));
            println!(
                "   Assets: {}",
                paths.assets.display().to_string().with(Color::Blue)
            );
        } else {
            println!("{paths}");
        }

        println!();
        if self.opts.use_color {
            println!("{}", self.skin.inline("**Report directory ready at:**"));
        } else {
            println!("Report directory ready at:");
        }
        println!("   {}", paths.base.display());
    }

    pub fn print_error(&self, message: &str) {
        if self.opts.use_color {
            eprintln!("{} {message}", "[ERROR]".with(Color::Red));
        } else {
            eprintln!("[ERROR] {message}");
        }
    }
}
