use std::fmt::Write;

use crate::{
  models::{filter::ProductFilter, product::Product},
  view::screen::Screen,
};

const COPYRIGHT: &str = "© 2016 Check24";

pub fn render(screen: &Screen) -> String {
  let mut out = String::new();

  match screen {
    Screen::Loading => out.push_str("Loading...\n"),
    Screen::Error(msg) => {
      let _ = writeln!(out, "Error: {}", msg);
      out.push_str("Pull to reload.\n");
    }
    Screen::Overview { header, filter, products } => {
      if let Some(h) = header {
        let _ = writeln!(out, "{}\n{}\n", h.header_title, h.header_description);
      }
      out.push_str(&filter_bar(*filter));
      out.push('\n');
      for p in products {
        out.push_str(&card(p));
      }
      if products.is_empty() {
        out.push_str("No products.\n");
      }
      let _ = writeln!(out, "\n{}", COPYRIGHT);
    }
    Screen::Detail(p) => {
      let marker = if p.is_favorite { " ★" } else { "" };
      let _ = writeln!(out, "Produktdetails\n\n{}{}", p.name, marker);
      let _ = writeln!(out, "[image] {}", p.image_url);
      let _ = writeln!(out, "{}\n\n{}\n", p.description, p.long_description);
      if let Some(price) = &p.price {
        let _ = writeln!(out, "Price: {} {}", price.value, price.currency);
      }
      let button = if p.is_favorite { "Vergessen" } else { "Vormerken" };
      let _ = writeln!(out, "[{}]\n\n{}", button, COPYRIGHT);
    }
    Screen::NotFound(_) => out.push_str("Product not found\n"),
    Screen::Legal { url } => {
      let _ = writeln!(out, "Rechtliche Hinweise\n{}", url);
    }
  }

  out
}

fn filter_bar(active: ProductFilter) -> String {
  ProductFilter::ALL
    .iter()
    .map(|f| if *f == active { format!("[{}]", f) } else { f.label() })
    .collect::<Vec<_>>()
    .join(" | ")
}

// Available products show the image first; unavailable ones last.
fn card(p: &Product) -> String {
  let image = format!("[image] {}", p.image_url);
  let mut text = format!("{}\n  {}\n  Rating: {}", p.name, p.description, p.rating);
  if p.is_favorite {
    text.push_str("\n  ★ Vorgemerkt");
  }

  if p.available { format!("{}\n  {}\n", image, text) } else { format!("{}\n  {}\n", text, image) }
}
