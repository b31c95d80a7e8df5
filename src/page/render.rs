// Pure markup rendering of the portfolio view-state. The canvases rendered
// here are the mount targets for the particle and rain effects.

use crate::page::content::{
    self, DeviceModel, Section, CONTACT, EXPERIENCES, PROJECTS, SKILL_CATEGORIES,
};
use crate::page::view::{ContactButton, PortfolioView};
use std::fmt::Write;

pub const PARTICLE_CANVAS_ID: &str = "particle-field";
pub const RAIN_CANVAS_ID: &str = "rain-field";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render(view: &PortfolioView) -> String {
    let mut html = String::new();
    html.push_str(r#"<div class="min-h-screen bg-black text-white">"#);
    render_progress(&mut html, view);
    render_navigation(&mut html, view);
    render_hero(&mut html);
    render_projects(&mut html, view);
    render_skills(&mut html, view);
    render_experience(&mut html);
    render_contact(&mut html, view);
    html.push_str("</div>");
    html
}

// Writing into a String cannot fail, so the fmt::Result of write! is dropped
// throughout.

fn render_progress(html: &mut String, view: &PortfolioView) {
    let _ = write!(
        html,
        r#"<div class="scroll-progress" style="transform: scaleX({})"></div>"#,
        view.progress.fraction()
    );
}

fn render_navigation(html: &mut String, view: &PortfolioView) {
    let nav = &view.navigation;
    let _ = write!(
        html,
        r#"<nav class="{}"><h1>{}</h1><ul>"#,
        if nav.scrolled() { "nav scrolled" } else { "nav" },
        escape(content::OWNER)
    );
    for section in Section::ALL.iter() {
        let active = nav.active() == *section;
        let _ = write!(
            html,
            r##"<li><a href="#{}" class="{}">{}{}</a></li>"##,
            section.id(),
            if active { "nav-link active" } else { "nav-link" },
            escape(section.label()),
            if active { r#"<span class="active-marker"></span>"# } else { "" }
        );
    }
    html.push_str("</ul></nav>");
}

fn render_hero(html: &mut String) {
    let _ = write!(
        html,
        r##"<section id="{}" class="hero"><canvas id="{}" class="absolute inset-0"></canvas><div class="hero-content"><h1>{}</h1><p>{}</p><p>{}</p><a href="#{}">Explorer mes projets</a><a href="#{}">Me contacter</a></div></section>"##,
        Section::Home.id(),
        PARTICLE_CANVAS_ID,
        escape(&content::OWNER.to_uppercase()),
        escape(content::HEADLINE),
        escape(content::TAGLINE),
        Section::Projects.id(),
        Section::Contact.id()
    );
}

fn render_projects(html: &mut String, view: &PortfolioView) {
    let _ = write!(
        html,
        r#"<section id="{}" class="projects"><h2>Projets Innovants</h2><div class="grid">"#,
        Section::Projects.id()
    );
    for project in PROJECTS {
        let mut class = String::from("project-card");
        if view.projects.is_selected(project.id) {
            class.push_str(" active");
        }
        if view.projects.is_hovered(project.id) {
            class.push_str(" hovered");
        }
        let model = match project.model {
            DeviceModel::Phone => "phone",
            DeviceModel::Laptop => "laptop",
        };
        let _ = write!(
            html,
            r#"<div class="{}" data-project="{}"><div class="device {}">{}</div><h3>{}</h3><p>{}</p>"#,
            class,
            project.id,
            model,
            escape(project.title),
            escape(project.title),
            escape(project.tech)
        );
        if view.projects.is_hovered(project.id) {
            html.push_str(r#"<div class="hint">Cliquer pour explorer</div>"#);
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");

    if let Some(project) = view.projects.selected() {
        let _ = write!(
            html,
            r#"<div class="project-detail"><h3>{}</h3><p>{}</p><div class="features">"#,
            escape(project.title),
            escape(project.description)
        );
        for feature in project.features {
            let _ = write!(html, r#"<span class="feature">{}</span>"#, escape(feature));
        }
        html.push_str("</div></div>");
    }
    html.push_str("</section>");
}

fn render_skills(html: &mut String, view: &PortfolioView) {
    let _ = write!(
        html,
        r#"<section id="{}" class="skills"><h2>Univers Technologique</h2><div class="grid">"#,
        Section::Skills.id()
    );
    for category in SKILL_CATEGORIES {
        let selected = view.skills.is_selected(category.name);
        let style = if selected {
            format!(
                "border-color: {c}; box-shadow: 0 0 30px {c}",
                c = category.color
            )
        } else {
            format!("border-color: {}50; box-shadow: none", category.color)
        };
        let _ = write!(
            html,
            r#"<div class="{}" data-category="{}" style="{}"><h3 style="color: {}">{}</h3><ul>"#,
            if selected { "skill-card selected" } else { "skill-card" },
            escape(category.name),
            style,
            category.color,
            escape(category.name)
        );
        for skill in category.skills {
            let _ = write!(html, "<li>{}</li>", escape(skill));
        }
        html.push_str("</ul></div>");
    }
    html.push_str("</div></section>");
}

fn render_experience(html: &mut String) {
    let _ = write!(
        html,
        r#"<section id="{}" class="experience"><h2>Parcours</h2><ol class="timeline">"#,
        Section::Experience.id()
    );
    for exp in EXPERIENCES {
        let _ = write!(
            html,
            r#"<li><span class="dot" style="background-color: {}"></span><h3 style="color: {}">{}</h3><p>{} • {}</p><p>{}</p></li>"#,
            exp.color,
            exp.color,
            escape(exp.title),
            escape(exp.company),
            escape(exp.period),
            escape(exp.description)
        );
    }
    html.push_str("</ol></section>");
}

fn render_contact(html: &mut String, view: &PortfolioView) {
    let hovered = view.contact.hovered();
    let _ = write!(
        html,
        r#"<section id="{}" class="contact"><canvas id="{}" class="absolute inset-0 pointer-events-none opacity-30"></canvas><h2>CONTACT</h2><div class="terminal"><span>{}</span><div>&gt; DEVELOPER: {}</div><div>&gt; EMAIL: {}</div><div>&gt; PHONE: {}</div><div>&gt; STATUS: READY TO CONNECT_</div></div>"#,
        Section::Contact.id(),
        RAIN_CANVAS_ID,
        escape(CONTACT.mailbox),
        escape(CONTACT.developer),
        escape(CONTACT.email),
        escape(CONTACT.phone)
    );
    let _ = write!(
        html,
        r#"<a href="mailto:{}" class="{}" data-button="email">ENVOYER UN EMAIL</a><a href="{}" class="{}" data-button="phone">APPELER</a>"#,
        escape(CONTACT.email),
        if hovered == Some(ContactButton::Email) { "button hovered" } else { "button" },
        escape(CONTACT.phone_href),
        if hovered == Some(ContactButton::Phone) { "button hovered" } else { "button" }
    );
    html.push_str(r#"<div class="socials">"#);
    for social in CONTACT.socials {
        let short: String = social.chars().take(2).collect();
        let _ = write!(
            html,
            r##"<a href="#" title="{}">{}</a>"##,
            escape(social),
            escape(&short)
        );
    }
    html.push_str("</div></section>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::view::SectionBounds;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn default_view_has_both_canvases_and_home_active() {
        let html = render(&PortfolioView::default());
        assert!(html.contains(r#"<canvas id="particle-field""#));
        assert!(html.contains(r#"<canvas id="rain-field""#));
        assert!(html.contains(r##"<a href="#home" class="nav-link active">Accueil<span class="active-marker"></span></a>"##));
        assert!(html.contains(r#"<nav class="nav">"#));
        assert!(!html.contains("project-detail"));
        for section in Section::ALL.iter() {
            assert!(html.contains(&format!(r#"<section id="{}""#, section.id())));
        }
    }

    #[test]
    fn reflects_view_state() {
        let mut view = PortfolioView::default();
        view.on_scroll(
            1200.0,
            &[(Section::Skills, SectionBounds { top: 0.0, bottom: 800.0 })],
            4000.0,
            1000.0,
        );
        view.projects.toggle(2);
        view.skills.toggle("Database");
        view.contact.hover(Some(ContactButton::Phone));
        let html = render(&view);

        assert!(html.contains(r#"<nav class="nav scrolled">"#));
        assert!(html.contains(r##"<a href="#competences" class="nav-link active">"##));
        assert!(html.contains("scaleX(0.4)"));
        assert!(html.contains(r#"<div class="project-card active" data-project="2">"#));
        assert!(html.contains("<h3>SupMap</h3><p>Navigation intelligente avec carte 3D</p>"));
        assert!(html.contains(r#"<span class="feature">Signalement d&#39;incidents</span>"#));
        assert!(html.contains(r#"<div class="skill-card selected" data-category="Database""#));
        assert!(html.contains(r#"class="button hovered" data-button="phone""#));
        assert!(html.contains(r#"class="button" data-button="email""#));
    }

    #[test]
    fn hovered_card_shows_hint() {
        let mut view = PortfolioView::default();
        view.projects.hover(Some(1));
        let html = render(&view);
        assert!(html.contains(r#"<div class="project-card hovered" data-project="1">"#));
        assert_eq!(html.matches("Cliquer pour explorer").count(), 1);
    }
}
