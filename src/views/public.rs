use maud::{Markup, html};

use super::label;
use crate::catalog::{Post, Product};
use crate::i18n::Lang;

pub fn home(lang: Lang) -> Markup {
    html! {
        h1 { (label(lang, "مصنع بادية العرب", "Badia Al Arab Factory")) }
        p { (label(
            lang,
            "تمور فاخرة من قلب البادية.",
            "Premium dates from the heart of the desert.",
        )) }
        p { a href="/products" { (label(lang, "تصفح المنتجات", "Browse our products")) } }
    }
}

pub fn about(lang: Lang) -> Markup {
    html! {
        h1 { (label(lang, "من نحن", "About us")) }
        p { (label(
            lang,
            "مصنع عائلي متخصص في إنتاج وتعبئة التمور منذ عقود.",
            "A family factory producing and packing dates for decades.",
        )) }
    }
}

pub fn products(lang: Lang, products: &[Product]) -> Markup {
    html! {
        h1 { (label(lang, "المنتجات", "Products")) }
        @if products.is_empty() {
            p { (label(lang, "لا توجد منتجات حالياً", "No products yet")) }
        }
        ul class="products" {
            @for product in products {
                li {
                    img src={ "/static/img/" (product.image) } alt=(product.name) width="120";
                    h2 { (product.name) }
                    p { (product.description) }
                    p class="price" { (format!("{:.2}", product.price)) }
                }
            }
        }
    }
}

pub fn faq(lang: Lang) -> Markup {
    html! {
        h1 { (label(lang, "الأسئلة الشائعة", "Frequently asked questions")) }
        dl {
            dt { (label(lang, "هل تشحنون خارج المملكة؟", "Do you ship internationally?")) }
            dd { (label(lang, "نعم، تواصل معنا عبر صفحة الاتصال.", "Yes, reach out via the contact page.")) }
            dt { (label(lang, "ما مدة صلاحية التمور؟", "How long do dates keep?")) }
            dd { (label(lang, "حتى سنة في مكان بارد وجاف.", "Up to a year in a cool, dry place.")) }
        }
    }
}

pub fn blog(lang: Lang, posts: &[Post]) -> Markup {
    html! {
        h1 { (label(lang, "المدونة", "Blog")) }
        ul class="posts" {
            @for post in posts {
                li {
                    h2 { a href={ "/blog/" (post.id) } { (post.title) } }
                    p { (post.summary) }
                }
            }
        }
    }
}

pub fn blog_detail(lang: Lang, post: &Post) -> Markup {
    html! {
        article {
            h1 { (post.title) }
            @if let Some(image) = &post.image {
                img src={ "/static/img/" (image) } alt=(post.title) width="320";
            }
            p { (post.content) }
            @if let Some(video) = &post.video {
                iframe src=(video) width="560" height="315" {}
            }
            p { a href="/blog" { (label(lang, "عودة إلى المدونة", "Back to the blog")) } }
        }
    }
}

pub fn privacy(lang: Lang) -> Markup {
    html! {
        h1 { (label(lang, "سياسة الخصوصية", "Privacy policy")) }
        p { (label(
            lang,
            "نستخدم بيانات التواصل للرد على استفساراتكم فقط.",
            "Contact details are used only to answer your inquiries.",
        )) }
    }
}

pub fn terms(lang: Lang) -> Markup {
    html! {
        h1 { (label(lang, "الشروط والأحكام", "Terms and conditions")) }
        p { (label(
            lang,
            "جميع الأسعار شاملة الضريبة ما لم يذكر خلاف ذلك.",
            "All prices include tax unless stated otherwise.",
        )) }
    }
}

pub fn contact(lang: Lang) -> Markup {
    html! {
        h1 { (label(lang, "اتصل بنا", "Contact us")) }
        form method="post" action="/contact" {
            label { (label(lang, "الاسم", "Name"))
                input type="text" name="name";
            }
            label { (label(lang, "البريد الإلكتروني", "Email"))
                input type="email" name="email";
            }
            label { (label(lang, "الهاتف", "Phone"))
                input type="text" name="phone";
            }
            label { (label(lang, "الرسالة", "Message"))
                textarea name="content" rows="5" {}
            }
            button type="submit" { (label(lang, "إرسال", "Send")) }
        }
    }
}

pub fn login(lang: Lang, error: Option<&str>) -> Markup {
    html! {
        h1 { (label(lang, "تسجيل الدخول", "Log in")) }
        @if let Some(error) = error {
            p class="notice danger" { (error) }
        }
        form method="post" action="/login" {
            label { (label(lang, "اسم المستخدم", "Username"))
                input type="text" name="username";
            }
            label { (label(lang, "كلمة المرور", "Password"))
                input type="password" name="password";
            }
            button type="submit" { (label(lang, "دخول", "Log in")) }
        }
    }
}
