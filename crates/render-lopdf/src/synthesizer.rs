//! Cover and closing page synthesis.
//!
//! Both operations are total: a missing or undecodable background falls
//! back to a solid fill, and any drawing failure degrades to a simpler page
//! instead of an error.

use crate::background::ImageXObject;
use crate::canvas::{PageCanvas, TextStyle};
use crate::config::{RenderingConfig, Rgb};
use crate::error::RenderError;
use crate::page::PageBuffer;
use cosmic_numerology::BirthDate;
use cosmic_typeset::select_font;
use std::sync::Arc;

const NAME_SIZE: f32 = 46.0;
const NAME_Y: f32 = 550.0;
const DATE_SIZE: f32 = 20.0;
const DATE_Y: f32 = 500.0;
const FOOTER_SIZE: f32 = 16.0;
const FOOTER_Y: f32 = 50.0;
const SHADOW_OFFSET: (f32, f32) = (2.0, -2.0);
const SHADOW_ALPHA: f32 = 0.8;

const THANK_YOU_SIZE: f32 = 32.0;
const CONTACT_SIZE: f32 = 18.0;
const EMAIL_Y: f32 = 100.0;
const WEBSITE_Y: f32 = 70.0;

/// Builds the branded single-page documents around the body document.
#[derive(Debug, Clone)]
pub struct PageSynthesizer {
    config: Arc<RenderingConfig>,
}

impl PageSynthesizer {
    pub fn new(config: Arc<RenderingConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderingConfig {
        &self.config
    }

    /// Loads and decodes a background image, or `None` if it is unusable.
    fn background(&self, path: &str) -> Option<ImageXObject> {
        let resources = self.config.resources();
        let bytes = match resources.load(path) {
            Ok(bytes) => bytes,
            Err(e) if e.is_not_found() => {
                log::debug!("Background '{}' not found in {}", path, resources.name());
                return None;
            }
            Err(e) => {
                log::warn!("Background '{}' could not be loaded: {}", path, e);
                return None;
            }
        };
        match ImageXObject::decode(&bytes) {
            Ok(image) => Some(image),
            Err(e) => {
                log::warn!("Background '{}' could not be decoded, using solid fill: {}", path, e);
                None
            }
        }
    }

    /// The cover page: background, the name centered with a drop shadow, the
    /// birth date beneath it and the website in the footer.
    ///
    /// The name is set in the script font when it contains script
    /// characters, otherwise in the serif font. The date always uses English
    /// month names and the default font.
    pub fn make_cover_page(&self, name: &str, birth_date: &BirthDate) -> PageBuffer {
        let background = self.background(&self.config.cover_background);
        let with_background = background.is_some();
        match self.draw_cover(name, birth_date, background) {
            Ok(page) => page,
            Err(e) if with_background => {
                log::warn!("Cover page with background failed, retrying with solid fill: {}", e);
                self.draw_cover(name, birth_date, None)
                    .unwrap_or_else(|e| self.blank_page("cover", e))
            }
            Err(e) => self.blank_page("cover", e),
        }
    }

    /// The closing page: the background image when available. Without one,
    /// a solid fill carrying the thank-you and contact lines.
    pub fn make_closing_page(&self) -> PageBuffer {
        let background = self.background(&self.config.closing_background);
        let with_background = background.is_some();
        match self.draw_closing(background) {
            Ok(page) => page,
            Err(e) if with_background => {
                log::warn!("Closing page with background failed, retrying with solid fill: {}", e);
                self.draw_closing(None)
                    .unwrap_or_else(|e| self.blank_page("closing", e))
            }
            Err(e) => self.blank_page("closing", e),
        }
    }

    fn blank_page(&self, which: &str, err: RenderError) -> PageBuffer {
        log::error!("Could not draw {} page, emitting blank page: {}", which, err);
        PageBuffer::blank(self.config.page)
    }

    fn draw_cover(
        &self,
        name: &str,
        birth_date: &BirthDate,
        background: Option<ImageXObject>,
    ) -> Result<PageBuffer, RenderError> {
        let config = &self.config;
        let mut canvas = PageCanvas::new(config.page, config.fonts());
        match background {
            Some(image) => canvas.draw_full_page_image(image),
            None => canvas.fill_page(Rgb::FALLBACK_FILL),
        }

        let center_x = config.page.width / 2.0;
        let name_font = select_font(name, config.script, &config.script_font, &config.serif_font);
        log::debug!("Using font '{}' for cover name", name_font);

        let name_style = TextStyle::new(name_font.clone(), NAME_SIZE, Rgb::DEEP_GOLD);
        draw_with_shadow(&mut canvas, name, &name_style, center_x, NAME_Y)?;

        let date_style = TextStyle::new(config.default_font.clone(), DATE_SIZE, Rgb::WHITE);
        draw_with_shadow(&mut canvas, &birth_date.long_form(), &date_style, center_x, DATE_Y)?;

        let footer_style = TextStyle::new(config.default_font.clone(), FOOTER_SIZE, Rgb::LIGHT_GREY);
        canvas.draw_centered_text(&config.branding.website, &footer_style, center_x, FOOTER_Y)?;

        canvas.finish()
    }

    fn draw_closing(&self, background: Option<ImageXObject>) -> Result<PageBuffer, RenderError> {
        let config = &self.config;
        let mut canvas = PageCanvas::new(config.page, config.fonts());
        let Some(image) = background else {
            canvas.fill_page(Rgb::FALLBACK_FILL);
            self.draw_contact_block(&mut canvas)?;
            return canvas.finish();
        };
        canvas.draw_full_page_image(image);
        canvas.finish()
    }

    fn draw_contact_block(&self, canvas: &mut PageCanvas<'_>) -> Result<(), RenderError> {
        let config = &self.config;
        let branding = &config.branding;
        let center_x = config.page.width / 2.0;
        let middle = config.page.height / 2.0;

        let heading = TextStyle::new(config.default_font.clone(), THANK_YOU_SIZE, Rgb::GOLD);
        canvas.draw_centered_text(&branding.thank_you, &heading, center_x, middle + 20.0)?;

        let contact = TextStyle::new(config.default_font.clone(), CONTACT_SIZE, Rgb::WHITE);
        canvas.draw_centered_text(&branding.practitioner, &contact, center_x, middle - 40.0)?;
        canvas.draw_centered_text(&branding.practitioner_title, &contact, center_x, middle - 70.0)?;

        let small = TextStyle {
            size: FOOTER_SIZE,
            ..contact
        };
        canvas.draw_centered_text(&branding.email, &small, center_x, EMAIL_Y)?;
        canvas.draw_centered_text(&branding.website, &small, center_x, WEBSITE_Y)?;
        Ok(())
    }
}

/// Draws a translucent black copy offset down-right, then the text itself.
fn draw_with_shadow(
    canvas: &mut PageCanvas<'_>,
    text: &str,
    style: &TextStyle,
    center_x: f32,
    y: f32,
) -> Result<(), RenderError> {
    let shadow = style.clone().with_color(Rgb::BLACK).with_alpha(SHADOW_ALPHA);
    canvas.draw_centered_text(text, &shadow, center_x + SHADOW_OFFSET.0, y + SHADOW_OFFSET.1)?;
    canvas.draw_centered_text(text, style, center_x, y)
}
