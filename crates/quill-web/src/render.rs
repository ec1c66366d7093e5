use tera::{Context, Tera};

use quill_core::models::text_piece::TextPiece;

const INDEX: &str = "index.html";

/// Compiled HTML templates.
///
/// Template names end in `.html`, so Tera autoescapes every interpolated
/// value; submitted text is never emitted as raw markup.
pub struct Pages {
    tera: Tera,
}

impl Pages {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX, include_str!("../templates/index.html"))?;
        Ok(Self { tera })
    }

    /// Render the home page: the submission form followed by every piece.
    pub fn index(&self, pieces: &[TextPiece]) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("pieces", pieces);
        self.tera.render(INDEX, &context)
    }
}
