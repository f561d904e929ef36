mod contact_form;
mod page;
mod reveal;
mod theme;
