//! The built-in template catalog.
//!
//! Six templates, loaded once at startup and treated as an injected
//! constant everywhere else. Never mutated at runtime.

use crate::models::template::{Template, TemplateCategory};

fn template(
    id: &str,
    name: &str,
    description: &str,
    category: TemplateCategory,
    preview_image: &str,
    full_preview_image: &str,
    colors: &[&str],
    features: &[&str],
    rating: f64,
    usage_count: u32,
) -> Template {
    Template {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        preview_image: preview_image.to_string(),
        full_preview_image: full_preview_image.to_string(),
        colors: colors.iter().map(|c| c.to_string()).collect(),
        features: features.iter().map(|f| f.to_string()).collect(),
        rating,
        usage_count,
    }
}

/// Builds the full catalog. Called once in `main`; handlers receive it as
/// a shared slice via `AppState`.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        template(
            "minimal-pro",
            "Minimal Pro",
            "Clean and elegant design perfect for professionals who prefer simplicity and clarity.",
            TemplateCategory::Minimal,
            "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=600",
            "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=1200",
            &["#000000", "#ffffff", "#f8f9fa", "#6c757d"],
            &[
                "Responsive design",
                "Dark/Light mode",
                "Smooth animations",
                "Contact form",
                "SEO optimized",
            ],
            4.9,
            2847,
        ),
        template(
            "creative-splash",
            "Creative Splash",
            "Vibrant and artistic template ideal for designers, artists, and creative professionals.",
            TemplateCategory::Creative,
            "https://images.pexels.com/photos/1779487/pexels-photo-1779487.jpeg?auto=compress&cs=tinysrgb&w=600",
            "https://images.pexels.com/photos/1779487/pexels-photo-1779487.jpeg?auto=compress&cs=tinysrgb&w=1200",
            &["#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#feca57"],
            &[
                "Creative animations",
                "Portfolio gallery",
                "Color customization",
                "Interactive elements",
                "Social media integration",
            ],
            4.8,
            1923,
        ),
        template(
            "tech-modern",
            "Tech Modern",
            "Contemporary design with tech-focused elements, perfect for developers and engineers.",
            TemplateCategory::Tech,
            "https://images.pexels.com/photos/574071/pexels-photo-574071.jpeg?auto=compress&cs=tinysrgb&w=600",
            "https://images.pexels.com/photos/574071/pexels-photo-574071.jpeg?auto=compress&cs=tinysrgb&w=1200",
            &["#2d3748", "#4a5568", "#0066cc", "#00d4aa", "#ffffff"],
            &[
                "Code syntax highlighting",
                "GitHub integration",
                "Tech skill badges",
                "Project showcase",
                "Blog section",
            ],
            4.9,
            3156,
        ),
        template(
            "business-elite",
            "Business Elite",
            "Professional and sophisticated design for executives, consultants, and business leaders.",
            TemplateCategory::Professional,
            "https://images.pexels.com/photos/7688336/pexels-photo-7688336.jpeg?auto=compress&cs=tinysrgb&w=600",
            "https://images.pexels.com/photos/7688336/pexels-photo-7688336.jpeg?auto=compress&cs=tinysrgb&w=1200",
            &["#1a202c", "#2d3748", "#4a5568", "#718096", "#e2e8f0"],
            &[
                "Executive layout",
                "Testimonials section",
                "Service offerings",
                "Professional gallery",
                "Contact scheduling",
            ],
            4.7,
            1654,
        ),
        template(
            "artistic-flow",
            "Artistic Flow",
            "Fluid and expressive design that showcases creativity through dynamic layouts and animations.",
            TemplateCategory::Creative,
            "https://images.pexels.com/photos/1183434/pexels-photo-1183434.jpeg?auto=compress&cs=tinysrgb&w=600",
            "https://images.pexels.com/photos/1183434/pexels-photo-1183434.jpeg?auto=compress&cs=tinysrgb&w=1200",
            &["#667eea", "#764ba2", "#f093fb", "#f5576c", "#4facfe"],
            &[
                "Fluid animations",
                "Creative layouts",
                "Image galleries",
                "Video backgrounds",
                "Interactive portfolio",
            ],
            4.8,
            2234,
        ),
        template(
            "minimal-white",
            "Minimal White",
            "Ultra-clean white space design that lets your content take center stage.",
            TemplateCategory::Minimal,
            "https://images.pexels.com/photos/4164418/pexels-photo-4164418.jpeg?auto=compress&cs=tinysrgb&w=600",
            "https://images.pexels.com/photos/4164418/pexels-photo-4164418.jpeg?auto=compress&cs=tinysrgb&w=1200",
            &["#ffffff", "#f8f9fa", "#dee2e6", "#495057", "#212529"],
            &[
                "Ultra-minimal design",
                "Typography focused",
                "Fast loading",
                "Accessibility optimized",
                "Print friendly",
            ],
            4.9,
            1876,
        ),
    ]
}

/// Looks up a template by id.
pub fn find_template<'a>(catalog: &'a [Template], id: &str) -> Option<&'a Template> {
    catalog.iter().find(|t| t.id == id)
}
