use maud::{Markup, html};

use super::label;
use crate::catalog::{Post, Product, User};
use crate::db::{ContactMessage, SiteSettings};
use crate::i18n::Lang;
use crate::service::credentials::Credential;

pub struct DashboardCounts {
    pub products: usize,
    pub posts: usize,
    pub users: usize,
    pub visitors: u64,
}

pub fn dashboard(lang: Lang, counts: &DashboardCounts, latest: &[ContactMessage]) -> Markup {
    html! {
        h1 { (label(lang, "لوحة التحكم", "Dashboard")) }
        ul class="counts" {
            li { (label(lang, "المنتجات: ", "Products: ")) (counts.products) }
            li { (label(lang, "المقالات: ", "Posts: ")) (counts.posts) }
            li { (label(lang, "المستخدمون: ", "Users: ")) (counts.users) }
            li { (label(lang, "الزوار: ", "Visitors: ")) (counts.visitors) }
        }
        h2 { (label(lang, "أحدث الرسائل", "Latest messages")) }
        (message_table(lang, latest))
    }
}

pub fn messages(lang: Lang, messages: &[ContactMessage]) -> Markup {
    html! {
        h1 { (label(lang, "الرسائل الواردة", "Inbound messages")) }
        (message_table(lang, messages))
    }
}

fn message_table(lang: Lang, messages: &[ContactMessage]) -> Markup {
    html! {
        @if messages.is_empty() {
            p { (label(lang, "لا توجد رسائل", "No messages")) }
        } @else {
            table class="messages" {
                tr {
                    th { (label(lang, "الاسم", "Name")) }
                    th { (label(lang, "البريد", "Email")) }
                    th { (label(lang, "الهاتف", "Phone")) }
                    th { (label(lang, "الرسالة", "Message")) }
                    th { (label(lang, "التاريخ", "Date")) }
                }
                @for msg in messages {
                    tr {
                        td { (msg.name) }
                        td { (msg.email) }
                        td { (msg.phone) }
                        td { (msg.content) }
                        td { (msg.timestamp.format("%Y-%m-%d %H:%M")) }
                    }
                }
            }
        }
    }
}

pub fn users(lang: Lang, users: &[User]) -> Markup {
    html! {
        h1 { (label(lang, "المستخدمون", "Users")) }
        p { a href="/admin/users/add" { (label(lang, "إضافة مستخدم", "Add user")) } }
        table {
            tr { th { "#" } th { (label(lang, "الاسم", "Username")) } th { (label(lang, "البريد", "Email")) } th {} }
            @for user in users {
                tr {
                    td { (user.id) }
                    td { (user.username) }
                    td { (user.email) }
                    td { a href={ "/admin/users/delete/" (user.id) } { (label(lang, "حذف", "Delete")) } }
                }
            }
        }
    }
}

pub fn user_form(lang: Lang) -> Markup {
    html! {
        h1 { (label(lang, "إضافة مستخدم", "Add user")) }
        form method="post" action="/admin/users/add" {
            label { (label(lang, "اسم المستخدم", "Username"))
                input type="text" name="username";
            }
            label { (label(lang, "البريد الإلكتروني", "Email"))
                input type="email" name="email";
            }
            button type="submit" { (label(lang, "حفظ", "Save")) }
        }
    }
}

pub fn products(lang: Lang, products: &[Product]) -> Markup {
    html! {
        h1 { (label(lang, "إدارة المنتجات", "Manage products")) }
        p { a href="/admin/products/add" { (label(lang, "إضافة منتج", "Add product")) } }
        table {
            tr {
                th { "#" }
                th { (label(lang, "الاسم", "Name")) }
                th { (label(lang, "السعر", "Price")) }
                th { (label(lang, "الصورة", "Image")) }
                th {}
            }
            @for product in products {
                tr {
                    td { (product.id) }
                    td { (product.name) }
                    td { (format!("{:.2}", product.price)) }
                    td { (product.image) }
                    td {
                        a href={ "/admin/products/edit/" (product.id) } { (label(lang, "تعديل", "Edit")) }
                        " "
                        a href={ "/admin/products/delete/" (product.id) } { (label(lang, "حذف", "Delete")) }
                    }
                }
            }
        }
    }
}

pub fn product_form(lang: Lang, product: Option<&Product>) -> Markup {
    let action = match product {
        Some(p) => format!("/admin/products/edit/{}", p.id),
        None => "/admin/products/add".to_string(),
    };
    html! {
        h1 { @if product.is_some() {
            (label(lang, "تعديل المنتج", "Edit product"))
        } @else {
            (label(lang, "إضافة منتج", "Add product"))
        } }
        form method="post" action=(action) enctype="multipart/form-data" {
            label { (label(lang, "الاسم", "Name"))
                input type="text" name="name" value=[product.map(|p| p.name.as_str())];
            }
            label { (label(lang, "الوصف", "Description"))
                textarea name="description" rows="4" {
                    @if let Some(p) = product { (p.description) }
                }
            }
            label { (label(lang, "السعر", "Price"))
                input type="text" name="price" value=[product.map(|p| format!("{:.2}", p.price))];
            }
            label { (label(lang, "الصورة", "Image"))
                input type="file" name="image";
            }
            button type="submit" { (label(lang, "حفظ", "Save")) }
        }
    }
}

pub fn posts(lang: Lang, posts: &[Post]) -> Markup {
    html! {
        h1 { (label(lang, "إدارة المقالات", "Manage posts")) }
        p { a href="/admin/posts/add" { (label(lang, "إضافة مقال", "Add post")) } }
        table {
            tr { th { "#" } th { (label(lang, "العنوان", "Title")) } th {} }
            @for post in posts {
                tr {
                    td { (post.id) }
                    td { (post.title) }
                    td {
                        a href={ "/admin/posts/edit/" (post.id) } { (label(lang, "تعديل", "Edit")) }
                        " "
                        a href={ "/admin/posts/delete/" (post.id) } { (label(lang, "حذف", "Delete")) }
                    }
                }
            }
        }
    }
}

pub fn post_form(lang: Lang, post: Option<&Post>) -> Markup {
    let action = match post {
        Some(p) => format!("/admin/posts/edit/{}", p.id),
        None => "/admin/posts/add".to_string(),
    };
    html! {
        h1 { @if post.is_some() {
            (label(lang, "تعديل المقال", "Edit post"))
        } @else {
            (label(lang, "إضافة مقال", "Add post"))
        } }
        form method="post" action=(action) enctype="multipart/form-data" {
            label { (label(lang, "العنوان", "Title"))
                input type="text" name="title" value=[post.map(|p| p.title.as_str())];
            }
            label { (label(lang, "الملخص", "Summary"))
                input type="text" name="summary" value=[post.map(|p| p.summary.as_str())];
            }
            label { (label(lang, "المحتوى", "Content"))
                textarea name="content" rows="8" {
                    @if let Some(p) = post { (p.content) }
                }
            }
            label { (label(lang, "رابط الفيديو", "Video URL"))
                input type="text" name="video" value=[post.and_then(|p| p.video.as_deref())];
            }
            label { (label(lang, "الصورة", "Image"))
                input type="file" name="image";
            }
            button type="submit" { (label(lang, "حفظ", "Save")) }
        }
    }
}

pub fn settings(lang: Lang, credential: &Credential, saved: bool) -> Markup {
    html! {
        h1 { (label(lang, "إعدادات الدخول", "Admin credentials")) }
        @if saved {
            p class="notice success" { (crate::i18n::Phrase::SettingsSaved.text(lang)) }
        }
        form method="post" action="/admin/settings" {
            label { (label(lang, "اسم المستخدم", "Username"))
                input type="text" name="username" value=(credential.username);
            }
            label { (label(lang, "كلمة المرور", "Password"))
                input type="text" name="password" value=(credential.password);
            }
            button type="submit" { (label(lang, "حفظ", "Save")) }
        }
    }
}

pub fn site_settings(lang: Lang, settings: &SiteSettings) -> Markup {
    html! {
        h1 { (label(lang, "بيانات الموقع", "Site settings")) }
        form method="post" action="/admin/site-settings" enctype="multipart/form-data" {
            label { (label(lang, "اسم الموقع", "Site name"))
                input type="text" name="site_name" value=(settings.site_name);
            }
            label { (label(lang, "البريد الإلكتروني", "Email"))
                input type="email" name="email" value=(settings.email);
            }
            label { (label(lang, "الهاتف", "Phone"))
                input type="text" name="phone" value=(settings.phone);
            }
            label { (label(lang, "العنوان", "Address"))
                input type="text" name="address" value=(settings.address);
            }
            label { (label(lang, "الشعار", "Logo"))
                input type="file" name="logo";
            }
            @if !settings.logo.is_empty() {
                p { (label(lang, "الشعار الحالي: ", "Current logo: ")) (settings.logo) }
            }
            button type="submit" { (label(lang, "حفظ", "Save")) }
        }
    }
}
