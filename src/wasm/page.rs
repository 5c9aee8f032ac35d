//! Renders the page into `#root` from the content registry.
//!
//! Markup is assembled as HTML strings; behavior is wired onto the tree
//! afterwards by `view`/`nav`. State reaches the renderer only through
//! element classes and CSS custom properties.

use web_sys::Element;

use crate::content::{self, FeatureDescriptor, ProjectDescriptor, ProjectStatus};

/// Section anchors, in nav order.
pub const SECTIONS: &[&str] = &["about", "projects", "stack", "community", "contact"];

pub fn render(root: &Element) {
    root.set_inner_html(&page_html());
}

fn page_html() -> String {
    format!(
        "{}{}<main class=\"spotlight\">{}{}{}{}{}</main>{}{}",
        effect_layers(),
        header(),
        hero(),
        features(),
        projects(),
        community(),
        contact(),
        footer(),
        modal_shell(),
    )
}

/// The decorative overlays: corner beam, revealed grids, grain, dust,
/// progress bar, prism, and the shimmer filter the beam runs through.
fn effect_layers() -> &'static str {
    "<div class=\"beam\"></div>\
     <div class=\"beam-echo\"></div>\
     <div class=\"dust\"></div>\
     <div class=\"grid-reveal\"></div>\
     <div class=\"grid-reveal-dense\"></div>\
     <div class=\"ascii-reveal\"></div>\
     <div class=\"grain\"></div>\
     <div class=\"progress\"></div>\
     <div class=\"prism\"></div>\
     <svg class=\"defs-only\" aria-hidden=\"true\" width=\"0\" height=\"0\">\
       <defs><filter id=\"shimmer\">\
         <feTurbulence type=\"fractalNoise\" baseFrequency=\"0.006\" numOctaves=\"2\" seed=\"3\" result=\"noise\"/>\
         <feDisplacementMap in=\"SourceGraphic\" in2=\"noise\" scale=\"2\" xChannelSelector=\"R\" yChannelSelector=\"G\"/>\
       </filter></defs>\
     </svg>"
}

fn nav_links(class: &str) -> String {
    SECTIONS
        .iter()
        .map(|s| format!("<a href=\"#{s}\" class=\"{class}\" data-nav=\"{s}\">{s}</a>"))
        .collect()
}

fn header() -> String {
    format!(
        "<header id=\"site-header\">\
           <div class=\"header-bar\">\
             <div class=\"brand\"><div class=\"brand-mark\">hl</div>\
               <span class=\"brand-name\">heleolabs</span></div>\
             <nav class=\"site-nav\">{}</nav>\
             <button id=\"menu-btn\" class=\"menu-btn\" aria-label=\"Toggle menu\">\u{2630}</button>\
           </div>\
           <nav id=\"menu\" class=\"mobile-menu\">{}</nav>\
         </header>",
        nav_links("nav-link"),
        nav_links("nav-link menu-link"),
    )
}

fn hero() -> String {
    let stats: String = [
        ("In Development", "3"),
        ("Network", "Hathor"),
        ("Launch", "Q2 2026"),
        ("Status", "Building"),
    ]
    .iter()
    .map(|(k, v)| {
        format!(
            "<div class=\"stat card reactive\"><div class=\"stat-label\">{k}</div>\
             <div class=\"stat-value\">{v}</div></div>"
        )
    })
    .collect();

    format!(
        "<section id=\"about\" class=\"section observed\">\
           <h1 class=\"hero-title scan reactive\" data-parallax=\"-0.10\">Hathor Network \
             <span class=\"hero-accent\">R&amp;D Studio</span></h1>\
           <p class=\"hero-lead\">Building the future of on-chain applications on Hathor \
             Network. We're creating a collaborative pixel canvas, a provably fair lottery, \
             and a DAO voting platform\u{2014}all leveraging Hathor's scalable DAG architecture.</p>\
           <div class=\"cta-row\">\
             <a href=\"#contact\" class=\"btn btn-solid\" data-nav=\"contact\">Engage \u{2192}</a>\
             <a href=\"#projects\" class=\"btn btn-ghost\" data-nav=\"projects\">What We're Building</a>\
           </div>\
           <div class=\"stats observed\" data-parallax=\"0.05\">{stats}</div>\
         </section>"
    )
}

fn feature_card(f: &FeatureDescriptor) -> String {
    let project = f.project.unwrap_or("");
    format!(
        "<div class=\"feature-card card reactive\">\
           <div class=\"feature-head\"><div class=\"feature-icon\">{}</div><h3>{}</h3></div>\
           <p class=\"feature-desc\">{}</p>\
           <div class=\"rule\"></div>\
           <button class=\"explore\" data-project=\"{project}\">Explore \u{2192}</button>\
         </div>",
        f.icon, f.title, f.desc,
    )
}

fn features() -> String {
    let cards: String = content::FEATURES.iter().map(feature_card).collect();
    format!(
        "<section id=\"stack\" class=\"section observed\">\
           <div class=\"feature-grid\" data-parallax=\"0.03\">{cards}</div>\
         </section>"
    )
}

fn status_dot(p: &ProjectDescriptor) -> &'static str {
    match p.status {
        ProjectStatus::Building => "<span class=\"status-dot\"></span>",
        ProjectStatus::Planned => "",
    }
}

fn tag_class(p: &ProjectDescriptor) -> &'static str {
    match p.status {
        ProjectStatus::Building => "tag tag-building",
        ProjectStatus::Planned => "tag tag-planned",
    }
}

/// Mobile showcase: one tappable row per project.
fn project_rows() -> String {
    content::PROJECTS
        .iter()
        .map(|p| {
            format!(
                "<div class=\"project-row card\" data-project=\"{}\">\
                   <div class=\"element-box\">\
                     <span class=\"atomic-number\">{}</span>{}\
                     <span class=\"element-symbol\">{}</span>\
                   </div>\
                   <div class=\"project-row-info\">\
                     <h3>{}</h3>\
                     <div class=\"project-row-meta\"><span class=\"{}\">{}</span>\
                       <span class=\"net\">{}</span></div>\
                   </div>\
                 </div>",
                p.key,
                p.atomic_number,
                status_dot(p),
                p.symbol,
                p.name,
                tag_class(p),
                p.tag,
                p.networks.join(" "),
            )
        })
        .collect()
}

/// Desktop showcase: the full periodic-table grid, silhouette gaps and
/// empty future slots included.
fn grid_cells() -> String {
    let mut cells = String::new();
    for row in 1..=content::GRID_ROWS {
        for col in 1..=content::GRID_COLS {
            if !content::grid_cell_visible(row, col) {
                cells.push_str("<div class=\"grid-gap\"></div>");
            } else if let Some(p) = content::project_at(row, col) {
                cells.push_str(&format!(
                    "<div class=\"element card\" data-project=\"{}\">\
                       <span class=\"atomic-number\">{}</span>{}\
                       <span class=\"element-symbol\">{}</span>\
                       <span class=\"element-name\">{}</span>\
                     </div>",
                    p.key,
                    p.atomic_number,
                    status_dot(p),
                    p.symbol,
                    p.name,
                ));
            } else {
                cells.push_str("<div class=\"grid-slot\"><span>?</span></div>");
            }
        }
    }
    cells
}

fn projects() -> String {
    format!(
        "<section id=\"projects\" class=\"section observed\">\
           <div class=\"section-head\">\
             <div><h2 class=\"scan\">Building on Hathor</h2>\
               <p class=\"section-sub\">Periodic Table of dApps</p></div>\
             <span class=\"roadmap\">2025 ROADMAP</span>\
           </div>\
           <div class=\"project-list\">{}</div>\
           <div class=\"periodic-grid\">{}</div>\
           <div class=\"legend\">\
             <span><span class=\"status-dot\"></span> In Development</span>\
             <span><span class=\"legend-box\"></span> Planned</span>\
             <span class=\"legend-future\"><span class=\"legend-box legend-box-faint\"></span> Future Slots</span>\
           </div>\
         </section>",
        project_rows(),
        grid_cells(),
    )
}

fn community() -> String {
    "<section id=\"community\" class=\"section observed\">\
       <div class=\"split\">\
         <div class=\"split-intro\"><h2 class=\"scan\">Join the Community</h2>\
           <p>Stay close to the lab\u{2014}connect with builders, get realtime drops, \
              and share feedback as we ship.</p></div>\
         <div class=\"community-links\">\
           <a href=\"https://t.me/HeleoLabs\" target=\"_blank\" rel=\"noopener noreferrer\" \
              class=\"community-card card reactive\">\
             <span class=\"community-kind\">Telegram</span>\
             <p>HeleoLabs Relay</p><span class=\"community-cta\">Enter the channel</span></a>\
           <a href=\"https://x.com/heleolabs\" target=\"_blank\" rel=\"noopener noreferrer\" \
              class=\"community-card card reactive\">\
             <span class=\"community-kind\">X</span>\
             <p>@heleolabs</p><span class=\"community-cta\">Follow updates</span></a>\
         </div>\
       </div>\
     </section>"
        .to_string()
}

fn contact() -> String {
    format!(
        "<section id=\"contact\" class=\"section section-last observed\">\
           <div class=\"split\">\
             <div class=\"split-intro\"><h2 class=\"scan\">Get In Touch</h2>\
               <p>Interested in our projects or want to collaborate? Reach out and \
                  let's build on Hathor together.</p>\
               <a class=\"btn btn-solid mail-link\" href=\"mailto:{addr}\">{addr}</a></div>\
             <form id=\"contact-form\" class=\"contact-form card reactive\">\
               <div class=\"form-grid\">\
                 <label>Name<input id=\"contact-name\" name=\"name\" placeholder=\"Your Name\"></label>\
                 <label>Email<input id=\"contact-email\" name=\"email\" type=\"email\" \
                        placeholder=\"you@email.com\"></label>\
               </div>\
               <label>Brief<textarea id=\"contact-brief\" name=\"brief\" \
                      placeholder=\"What are we building and why?\"></textarea></label>\
               <button type=\"submit\" class=\"btn btn-solid\">Transmit \u{2192}</button>\
             </form>\
           </div>\
         </section>",
        addr = crate::contact::CONTACT_ADDRESS,
    )
}

fn footer() -> String {
    let year = js_sys::Date::new_0().get_full_year();
    format!(
        "<footer class=\"site-footer\">\u{a9} {year} heleolabs \u{2014} Building on \
         Hathor Network</footer>"
    )
}

fn modal_shell() -> &'static str {
    "<div id=\"modal\" class=\"modal-backdrop\" hidden>\
       <div class=\"modal-box\">\
         <button id=\"modal-close\" class=\"modal-close\" aria-label=\"Close\">\u{2715}</button>\
         <div id=\"modal-content\"></div>\
       </div>\
     </div>"
}

/// Modal body for one project; re-rendered on every open.
pub fn modal_content_html(p: &ProjectDescriptor) -> String {
    let nets: String = p
        .networks
        .iter()
        .map(|n| format!("<span class=\"net-pill\">{n}</span>"))
        .collect();
    let active = match p.status {
        ProjectStatus::Building => {
            "<div class=\"active-dev\"><span class=\"status-dot\"></span> ACTIVE DEVELOPMENT</div>"
        }
        ProjectStatus::Planned => "",
    };
    let features: String = p
        .features
        .iter()
        .map(|f| format!("<li>{f}</li>"))
        .collect();
    let tech: String = p
        .tech
        .iter()
        .map(|t| format!("<span class=\"tech-pill\">{t}</span>"))
        .collect();

    format!(
        "<h3 class=\"modal-title\">{}</h3>\
         <div class=\"modal-meta\"><span class=\"{}\">{}</span>{nets}</div>\
         {active}\
         <p class=\"modal-desc\">{}</p>\
         <h4>Key Features</h4><ul class=\"modal-features\">{features}</ul>\
         <h4>Tech Stack</h4><div class=\"tech-pills\">{tech}</div>\
         <div class=\"modal-cta-row\">\
           <a href=\"#contact\" class=\"btn btn-solid\" data-nav=\"contact\">Get Involved \u{2192}</a>\
         </div>",
        p.name,
        tag_class(p),
        p.tag,
        p.description,
    )
}
