//! Translated UI strings and locale-specific structured content.
//!
//! Every locale fills every field of the shared schema; the bundles below are
//! `const` struct literals, so a missing translation is a compile error, not
//! a runtime fallback. The label lookup helpers still fall back to the raw
//! identifier for defensiveness, but with exhaustive bundles that path only
//! covers genuine content gaps.

use rust_decimal::Decimal;

use shopsphere_core::{ProductId, StockStatus};

use crate::catalog::view::{CategoryFilter, ColorFilter, SortKey};
use crate::catalog::{Category, Color};

/// The full message bundle for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub navbar: NavbarMessages,
    pub home: HomeMessages,
    pub shop: ShopMessages,
    pub cart: CartMessages,
    pub auth: AuthMessages,
}

/// Navigation chrome strings.
#[derive(Debug, Clone, Copy)]
pub struct NavbarMessages {
    pub region_label: &'static str,
    pub selector_aria_label: &'static str,
    pub apply_label: &'static str,
    pub nav_shop: &'static str,
    pub nav_cart: &'static str,
    pub nav_login: &'static str,
    pub nav_signup: &'static str,
}

/// A curated collection teased on the home page.
#[derive(Debug, Clone, Copy)]
pub struct HomeCollection {
    pub name: &'static str,
    pub description: &'static str,
    pub image_alt: &'static str,
}

/// A service perk shown on the home page.
#[derive(Debug, Clone, Copy)]
pub struct HomePerk {
    pub title: &'static str,
    pub description: &'static str,
}

/// A customer testimonial.
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

/// Home page strings and structured content.
#[derive(Debug, Clone, Copy)]
pub struct HomeMessages {
    pub hero_badge: &'static str,
    pub hero_title: &'static str,
    pub hero_description: &'static str,
    pub hero_primary_cta: &'static str,
    pub hero_secondary_cta: &'static str,
    pub hero_spotlight_title: &'static str,
    pub hero_spotlight_description: &'static str,
    pub featured_heading: &'static str,
    pub featured_description: &'static str,
    pub featured_view_all: &'static str,
    pub featured_item_cta: &'static str,
    pub trending_heading: &'static str,
    pub trending_description: &'static str,
    pub trending_cta: &'static str,
    pub trending_item_cta: &'static str,
    pub trending_collections: &'static [HomeCollection],
    pub perks: &'static [HomePerk],
    pub testimonials_heading: &'static str,
    pub testimonials_description: &'static str,
    pub testimonials_cta: &'static str,
    pub testimonials: &'static [Testimonial],
    pub membership_heading: &'static str,
    pub membership_description: &'static str,
    pub membership_primary_cta: &'static str,
    pub membership_secondary_cta: &'static str,
    pub membership_highlights_title: &'static str,
    pub membership_highlights: &'static [&'static str],
}

/// A category choice on the shop page, including the "all" sentinel entry.
#[derive(Debug, Clone, Copy)]
pub struct CategoryOption {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub description: &'static str,
}

/// A color choice on the shop page, including the "all" sentinel entry.
#[derive(Debug, Clone, Copy)]
pub struct ColorOption {
    pub filter: ColorFilter,
    pub label: &'static str,
}

/// A sort choice on the shop page.
#[derive(Debug, Clone, Copy)]
pub struct SortOption {
    pub sort: SortKey,
    pub label: &'static str,
}

/// A service highlight card on the shop page.
#[derive(Debug, Clone, Copy)]
pub struct ShopHighlight {
    pub title: &'static str,
    pub description: &'static str,
}

/// An editorial story teaser on the shop page.
#[derive(Debug, Clone, Copy)]
pub struct EditorialStory {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub href: &'static str,
}

/// Shop page strings, label tables, and the rating-summary formatter.
#[derive(Debug, Clone, Copy)]
pub struct ShopMessages {
    pub hero_badge: &'static str,
    pub hero_title: &'static str,
    pub hero_description: &'static str,
    pub hero_callouts: &'static [&'static str],
    pub hero_card_title: &'static str,
    pub hero_card_description: &'static str,
    pub category_heading: &'static str,
    pub categories: &'static [CategoryOption],
    pub color_label: &'static str,
    pub color_options: &'static [ColorOption],
    pub sort_label: &'static str,
    pub sort_options: &'static [SortOption],
    pub reset_label: &'static str,
    pub styles_available_label: &'static str,
    pub styles_description: &'static str,
    pub empty_state: &'static str,
    pub new_badge: &'static str,
    pub view_details: &'static str,
    /// Composes a fixed-one-decimal rating and a review count into a single
    /// localized summary. A function, not a template: word order and
    /// pluralization vary by language.
    pub rating_summary: fn(Decimal, u32) -> String,
    pub reserve_heading: &'static str,
    pub reserve_description: &'static str,
    pub reserve_primary_cta: &'static str,
    pub reserve_secondary_cta: &'static str,
    pub reserve_perks_title: &'static str,
    pub reserve_perks: &'static [&'static str],
    pub service_highlights_heading: &'static str,
    pub service_highlights: &'static [ShopHighlight],
    pub stories_heading: &'static str,
    pub stories_description: &'static str,
    pub stories_cta: &'static str,
    pub stories_read_more: &'static str,
    pub editorial_stories: &'static [EditorialStory],
}

impl ShopMessages {
    /// Display label for a category, falling back to the raw identifier when
    /// the table has no entry.
    #[must_use]
    pub fn category_label(&self, category: Category) -> &'static str {
        self.categories
            .iter()
            .find_map(|option| match option.filter {
                CategoryFilter::Only(c) if c == category => Some(option.label),
                _ => None,
            })
            .unwrap_or(category.as_str())
    }

    /// Display label for a color, falling back to the raw value when the
    /// table has no entry.
    #[must_use]
    pub fn color_label(&self, color: Color) -> &'static str {
        self.color_options
            .iter()
            .find_map(|option| match option.filter {
                ColorFilter::Only(c) if c == color => Some(option.label),
                _ => None,
            })
            .unwrap_or(color.as_str())
    }

    /// Display label for a sort key, falling back to the raw query value.
    #[must_use]
    pub fn sort_label_for(&self, sort: SortKey) -> &'static str {
        self.sort_options
            .iter()
            .find(|option| option.sort == sort)
            .map_or(sort.as_query(), |option| option.label)
    }
}

/// Labels for the cart line-item detail list.
#[derive(Debug, Clone, Copy)]
pub struct CartDetailLabels {
    pub color: &'static str,
    pub size: &'static str,
    pub quantity: &'static str,
}

/// Display copy for each stock status. Exhaustive over [`StockStatus`].
#[derive(Debug, Clone, Copy)]
pub struct StatusCopy {
    pub in_stock: &'static str,
    pub low_stock: &'static str,
    pub backorder: &'static str,
}

impl StatusCopy {
    /// The label for a stock status. Exhaustive; cannot miss.
    #[must_use]
    pub const fn label(&self, status: StockStatus) -> &'static str {
        match status {
            StockStatus::InStock => self.in_stock,
            StockStatus::LowStock => self.low_stock,
            StockStatus::Backorder => self.backorder,
        }
    }
}

/// Labels for the cart order-summary block.
#[derive(Debug, Clone, Copy)]
pub struct OrderSummaryLabels {
    pub subtotal: &'static str,
    pub shipping: &'static str,
    pub estimated_tax: &'static str,
    pub savings: &'static str,
    pub total: &'static str,
    pub checkout_cta: &'static str,
    pub checkout_note: &'static str,
}

/// A fulfillment highlight card on the cart page.
#[derive(Debug, Clone, Copy)]
pub struct CartHighlight {
    pub title: &'static str,
    pub description: &'static str,
}

/// A recommended add-on product on the cart page.
#[derive(Debug, Clone, Copy)]
pub struct Recommendation {
    pub name: &'static str,
    /// Reference-currency price in whole units.
    pub price: i64,
    pub image_alt: &'static str,
}

/// Cart page strings and structured content.
#[derive(Debug, Clone, Copy)]
pub struct CartMessages {
    pub header_badge: &'static str,
    pub header_title: &'static str,
    pub header_description: &'static str,
    pub continue_shopping_label: &'static str,
    pub detail_labels: CartDetailLabels,
    pub status_copy: StatusCopy,
    /// Lead-time copy per seeded cart product.
    pub lead_times: &'static [(ProductId, &'static str)],
    pub move_to_saved: &'static str,
    pub remove_item: &'static str,
    pub fulfillment_heading: &'static str,
    pub fulfillment_highlights: &'static [CartHighlight],
    pub order_summary_heading: &'static str,
    pub order_summary: OrderSummaryLabels,
    pub reserve_heading: &'static str,
    pub reserve_description: &'static str,
    pub reserve_cta: &'static str,
    pub recommendations_heading: &'static str,
    pub recommendations_description: &'static str,
    pub recommendations_collections_cta: &'static str,
    pub recommendations_cta: &'static str,
    pub recommendations: &'static [Recommendation],
}

impl CartMessages {
    /// Lead-time copy for a cart line, if the table has an entry for the
    /// product.
    #[must_use]
    pub fn lead_time(&self, product_id: ProductId) -> Option<&'static str> {
        self.lead_times
            .iter()
            .find(|(id, _)| *id == product_id)
            .map(|(_, text)| *text)
    }
}

/// Login and signup form strings.
#[derive(Debug, Clone, Copy)]
pub struct AuthMessages {
    pub login_title: &'static str,
    pub login_subtitle: &'static str,
    pub signup_title: &'static str,
    pub signup_subtitle: &'static str,
    pub first_name_label: &'static str,
    pub last_name_label: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub password_label: &'static str,
    pub password_placeholder: &'static str,
    pub confirm_password_label: &'static str,
    pub remember_label: &'static str,
    pub forgot_password: &'static str,
    pub marketing_label: &'static str,
    pub login_cta: &'static str,
    pub signup_cta: &'static str,
    pub login_footer_prompt: &'static str,
    pub login_footer_cta: &'static str,
    pub signup_footer_prompt: &'static str,
    pub signup_footer_cta: &'static str,
    pub error_missing_fields: &'static str,
    pub error_missing_name: &'static str,
    pub error_invalid_email: &'static str,
    pub error_password_short: &'static str,
    pub error_password_mismatch: &'static str,
    pub error_generic: &'static str,
}

impl AuthMessages {
    /// Map a redirect error code to display copy. Unknown codes get the
    /// generic message rather than breaking the page.
    #[must_use]
    pub fn error_message(&self, code: &str) -> &'static str {
        match code {
            "missing_fields" => self.error_missing_fields,
            "missing_name" => self.error_missing_name,
            "invalid_email" => self.error_invalid_email,
            "password_short" => self.error_password_short,
            "password_mismatch" => self.error_password_mismatch,
            _ => self.error_generic,
        }
    }
}

fn rating_summary_en(rating: Decimal, reviews: u32) -> String {
    format!("{rating:.1} rating | {reviews} reviews")
}

fn rating_summary_th(rating: Decimal, reviews: u32) -> String {
    format!("คะแนน {rating:.1} | {reviews} รีวิว")
}

pub(crate) const EN_US: Messages = Messages {
    navbar: NavbarMessages {
        region_label: "Region & Language",
        selector_aria_label: "Change display language and currency",
        apply_label: "Apply",
        nav_shop: "Shop",
        nav_cart: "Cart",
        nav_login: "Sign in",
        nav_signup: "Sign up",
    },
    home: HomeMessages {
        hero_badge: "New Season Capsule",
        hero_title: "Essentials for life on the move.",
        hero_description: "Discover tailored layers and premium accessories designed to keep pace with your schedule. Build a wardrobe that works for every moment, from studio sessions to weekend escapes.",
        hero_primary_cta: "Shop the collection",
        hero_secondary_cta: "Browse all categories",
        hero_spotlight_title: "Featured: The Everyday Travel Set",
        hero_spotlight_description: "Crafted with recycled materials and designed for effortless layering.",
        featured_heading: "Featured products",
        featured_description: "Curated picks that pair with everything in your closet.",
        featured_view_all: "View all products",
        featured_item_cta: "Quick view",
        trending_heading: "Collections trending now",
        trending_description: "Explore edits crafted by our design team to bring seasonal balance to your rotation.",
        trending_cta: "Explore all edits",
        trending_item_cta: "Shop now",
        trending_collections: &[
            HomeCollection {
                name: "Fall Layers",
                description: "Warm textures, earthy palettes.",
                image_alt: "Model wearing layered fall outfit",
            },
            HomeCollection {
                name: "Active Essentials",
                description: "Technical fabrics built to move.",
                image_alt: "Flat lay of activewear pieces",
            },
            HomeCollection {
                name: "Lounge Edit",
                description: "Soft knits made for slow mornings.",
                image_alt: "Cozy loungewear on a sofa",
            },
        ],
        perks: &[
            HomePerk {
                title: "Free shipping",
                description: "Complimentary shipping on orders over $75.",
            },
            HomePerk {
                title: "Easy returns",
                description: "30-day return window with instant store credit.",
            },
            HomePerk {
                title: "Member rewards",
                description: "Earn points on every purchase and redeem anytime.",
            },
        ],
        testimonials_heading: "Loved by thousands of customers",
        testimonials_description: "Honest feedback from people who trust us with their everyday wardrobe.",
        testimonials_cta: "Read all reviews",
        testimonials: &[
            Testimonial {
                quote: "The quality rivals luxury brands at a fraction of the cost. My go-to for wardrobe staples.",
                name: "Jamie Lee",
                role: "Verified Customer",
            },
            Testimonial {
                quote: "Shipping was quick and the pieces fit perfectly right out of the box.",
                name: "Morgan Smith",
                role: "Loyal Member",
            },
        ],
        membership_heading: "Join the Collective",
        membership_description: "Become a member for early access drops, styling sessions, and exclusive pricing. It is the easiest way to stay inspired and shop smarter.",
        membership_primary_cta: "Get started",
        membership_secondary_cta: "See member benefits",
        membership_highlights_title: "Member highlights",
        membership_highlights: &[
            "Invitations to limited-run capsule drops.",
            "Monthly styling tips from our creative team.",
            "Priority support and extended return windows.",
        ],
    },
    shop: ShopMessages {
        hero_badge: "Fall arrivals",
        hero_title: "Shop the essentials built to move with you",
        hero_description: "Discover modular layers, refined accessories, and versatile silhouettes designed for long-term wear. Filter by category or color to curate the perfect capsule.",
        hero_callouts: &["New drops every Thursday", "Free exchanges within 30 days"],
        hero_card_title: "Curated by our design team",
        hero_card_description: "Every look is built with recycled fibers and traceable manufacturing partners.",
        category_heading: "Shop by category",
        categories: &[
            CategoryOption {
                filter: CategoryFilter::All,
                label: "All styles",
                description: "Browse every capsule in one place.",
            },
            CategoryOption {
                filter: CategoryFilter::Only(Category::Outerwear),
                label: "Outerwear",
                description: "Layer-ready trenches, puffers, and vests.",
            },
            CategoryOption {
                filter: CategoryFilter::Only(Category::Bags),
                label: "Bags",
                description: "Carryalls crafted for daily movement.",
            },
            CategoryOption {
                filter: CategoryFilter::Only(Category::Dresses),
                label: "Dresses",
                description: "Easy silhouettes with a refined finish.",
            },
            CategoryOption {
                filter: CategoryFilter::Only(Category::Essentials),
                label: "Essentials",
                description: "Everyday foundations for clean styling.",
            },
            CategoryOption {
                filter: CategoryFilter::Only(Category::Travel),
                label: "Travel",
                description: "Weekender gear built for light packing.",
            },
            CategoryOption {
                filter: CategoryFilter::Only(Category::Accessories),
                label: "Accessories",
                description: "Complete your look with subtle layers.",
            },
            CategoryOption {
                filter: CategoryFilter::Only(Category::Sweaters),
                label: "Sweaters",
                description: "Supersoft knits for transitional weather.",
            },
        ],
        color_label: "Color focus",
        color_options: &[
            ColorOption { filter: ColorFilter::All, label: "All" },
            ColorOption { filter: ColorFilter::Only(Color::Cognac), label: "Cognac" },
            ColorOption { filter: ColorFilter::Only(Color::Black), label: "Black" },
            ColorOption { filter: ColorFilter::Only(Color::Fog), label: "Fog" },
            ColorOption { filter: ColorFilter::Only(Color::Coal), label: "Coal" },
            ColorOption { filter: ColorFilter::Only(Color::Steel), label: "Steel" },
            ColorOption { filter: ColorFilter::Only(Color::Tan), label: "Tan" },
            ColorOption { filter: ColorFilter::Only(Color::Stone), label: "Stone" },
            ColorOption { filter: ColorFilter::Only(Color::Olive), label: "Olive" },
            ColorOption { filter: ColorFilter::Only(Color::Jet), label: "Jet" },
            ColorOption { filter: ColorFilter::Only(Color::Pearl), label: "Pearl" },
            ColorOption { filter: ColorFilter::Only(Color::Umber), label: "Umber" },
            ColorOption { filter: ColorFilter::Only(Color::Charcoal), label: "Charcoal" },
            ColorOption { filter: ColorFilter::Only(Color::Ivory), label: "Ivory" },
            ColorOption { filter: ColorFilter::Only(Color::Sable), label: "Sable" },
            ColorOption { filter: ColorFilter::Only(Color::Midnight), label: "Midnight" },
            ColorOption { filter: ColorFilter::Only(Color::Alpine), label: "Alpine" },
            ColorOption { filter: ColorFilter::Only(Color::Sand), label: "Sand" },
            ColorOption { filter: ColorFilter::Only(Color::Slate), label: "Slate" },
        ],
        sort_label: "Sort",
        sort_options: &[
            SortOption { sort: SortKey::Featured, label: "Featured" },
            SortOption { sort: SortKey::PriceLowToHigh, label: "Price: Low to High" },
            SortOption { sort: SortKey::PriceHighToLow, label: "Price: High to Low" },
            SortOption { sort: SortKey::Newest, label: "Newest arrivals" },
            SortOption { sort: SortKey::TopRated, label: "Top rated" },
        ],
        reset_label: "Reset",
        styles_available_label: "styles available",
        styles_description: "Showing capsule picks that keep their shape and color after 50+ wears.",
        empty_state: "No styles match your filters. Reset to browse the full collection.",
        new_badge: "New",
        view_details: "View details",
        rating_summary: rating_summary_en,
        reserve_heading: "Reserve the looks you love",
        reserve_description: "Join ShopSphere Reserve to unlock 24-hour early access on drops, members-only pricing, and complimentary express shipping on every order.",
        reserve_primary_cta: "Become a member",
        reserve_secondary_cta: "Explore collections",
        reserve_perks_title: "Member perks",
        reserve_perks: &[
            "Early access to weekly capsules",
            "Dedicated stylist hotline",
            "Extended returns and instant credit",
        ],
        service_highlights_heading: "Service highlights",
        service_highlights: &[
            ShopHighlight {
                title: "Complimentary alterations",
                description: "Visit any Studio to tailor outerwear and dresses to your perfect fit.",
            },
            ShopHighlight {
                title: "Express carbon-neutral delivery",
                description: "All orders ship in recyclable packaging with tracked updates to your inbox.",
            },
            ShopHighlight {
                title: "Personal styling sessions",
                description: "Book a 30-minute virtual styling consult to maximize each capsule purchase.",
            },
        ],
        stories_heading: "Style stories",
        stories_description: "Insights from our team to keep your wardrobe in rotation.",
        stories_cta: "View all stories",
        stories_read_more: "Read the story",
        editorial_stories: &[
            EditorialStory {
                title: "How to build a carry-on capsule",
                excerpt: "Our design team shares four looks that style the same weekender kit.",
                href: "/editorial/carry-on-capsule",
            },
            EditorialStory {
                title: "Fabric spotlight: Recycled cashmere blend",
                excerpt: "Meet the upgraded knit story sourced from small-batch mills in Italy.",
                href: "/editorial/cashmere-blend",
            },
        ],
    },
    cart: CartMessages {
        header_badge: "Your bag",
        header_title: "Ready to check out?",
        header_description: "Review the pieces in your cart, adjust quantities, or move items to your saved list. Everything ships carbon-neutral with free exchanges within thirty days.",
        continue_shopping_label: "Continue shopping",
        detail_labels: CartDetailLabels {
            color: "Color",
            size: "Size",
            quantity: "Quantity",
        },
        status_copy: StatusCopy {
            in_stock: "In stock",
            low_stock: "Low stock",
            backorder: "Backorder",
        },
        lead_times: &[
            (ProductId::new(1), "Arrives in 3-5 business days"),
            (ProductId::new(2), "Arrives in 2-4 business days"),
            (ProductId::new(3), "Ships tomorrow"),
        ],
        move_to_saved: "Move to saved",
        remove_item: "Remove",
        fulfillment_heading: "Fulfillment perks",
        fulfillment_highlights: &[
            CartHighlight {
                title: "Carbon-neutral delivery",
                description: "Every order ships with certified carbon offsets and recyclable packaging.",
            },
            CartHighlight {
                title: "Same-day pick up",
                description: "Order by 2pm and pick up at select Studio locations in under 3 hours.",
            },
            CartHighlight {
                title: "30-day fit guarantee",
                description: "Try it at home and swap sizes within thirty days at no extra cost.",
            },
        ],
        order_summary_heading: "Order summary",
        order_summary: OrderSummaryLabels {
            subtotal: "Subtotal",
            shipping: "Shipping",
            estimated_tax: "Estimated tax",
            savings: "Member savings",
            total: "Total",
            checkout_cta: "Proceed to checkout",
            checkout_note: "You can review delivery options and apply additional promo codes during checkout.",
        },
        reserve_heading: "Unlock complimentary 2-day shipping",
        reserve_description: "Check out with ShopSphere Reserve and get automatic expedited shipping plus priority support on your next order.",
        reserve_cta: "Learn more",
        recommendations_heading: "You might also like",
        recommendations_description: "Complete the look with pieces curated by our stylists.",
        recommendations_collections_cta: "View all collections",
        recommendations_cta: "Add to cart",
        recommendations: &[
            Recommendation {
                name: "Structured Card Wallet",
                price: 68,
                image_alt: "Brown leather card wallet on a marble surface",
            },
            Recommendation {
                name: "Heritage Belt",
                price: 54,
                image_alt: "Tan leather belt with brushed hardware",
            },
            Recommendation {
                name: "Travel Pouch",
                price: 42,
                image_alt: "Canvas toiletry pouch with zipper detail",
            },
        ],
    },
    auth: AuthMessages {
        login_title: "Sign in",
        login_subtitle: "Sign in to review orders and manage your account.",
        signup_title: "Create your account",
        signup_subtitle: "Join ShopSphere to track orders and unlock member pricing.",
        first_name_label: "First name",
        last_name_label: "Last name",
        email_label: "Email address",
        email_placeholder: "you@example.com",
        password_label: "Password",
        password_placeholder: "Enter your password",
        confirm_password_label: "Confirm password",
        remember_label: "Remember me",
        forgot_password: "Forgot password?",
        marketing_label: "Send me styling tips and early access to drops.",
        login_cta: "Sign in",
        signup_cta: "Create account",
        login_footer_prompt: "New to ShopSphere?",
        login_footer_cta: "Create an account",
        signup_footer_prompt: "Already have an account?",
        signup_footer_cta: "Sign in",
        error_missing_fields: "Enter both email and password to continue.",
        error_missing_name: "Enter your first and last name.",
        error_invalid_email: "Enter a valid email address.",
        error_password_short: "Password must be at least 8 characters.",
        error_password_mismatch: "Passwords do not match.",
        error_generic: "Something went wrong. Please try again.",
    },
};

pub(crate) const TH_TH: Messages = Messages {
    navbar: NavbarMessages {
        region_label: "ภูมิภาคและภาษา",
        selector_aria_label: "เปลี่ยนภาษาและสกุลเงินที่แสดง",
        apply_label: "ตกลง",
        nav_shop: "ช้อป",
        nav_cart: "ตะกร้า",
        nav_login: "เข้าสู่ระบบ",
        nav_signup: "สมัครสมาชิก",
    },
    home: HomeMessages {
        hero_badge: "คอลเลกชันฤดูกาลใหม่",
        hero_title: "ไอเท็มที่จำเป็นสำหรับทุกจังหวะชีวิต",
        hero_description: "ค้นพบเลเยอร์ที่ตัดเย็บอย่างพิถีพิถันและแอ็กเซสซอรี่คุณภาพสูงที่พร้อมไปกับตารางชีวิตของคุณ สร้างลุคที่พร้อมสำหรับทุกช่วงเวลา ตั้งแต่ทำงานจนถึงวันหยุดสบาย ๆ",
        hero_primary_cta: "เลือกซื้อคอลเลกชัน",
        hero_secondary_cta: "ดูหมวดหมู่ทั้งหมด",
        hero_spotlight_title: "ไฮไลต์: Everyday Travel Set",
        hero_spotlight_description: "ผลิตจากวัสดุรีไซเคิล ออกแบบเพื่อการเลเยอร์อย่างสบาย.",
        featured_heading: "สินค้าที่แนะนำ",
        featured_description: "ชิ้นเด่นที่มิกซ์แอนด์แมตช์กับทุกลุคได้ง่าย",
        featured_view_all: "ดูสินค้าทั้งหมด",
        featured_item_cta: "ดูรายละเอียด",
        trending_heading: "คอลเลกชันยอดนิยมตอนนี้",
        trending_description: "สำรวจชุดที่ทีมออกแบบจัดสรรเพื่อบาลานซ์สไตล์ตามฤดูกาลของคุณ",
        trending_cta: "ชมทุกลุค",
        trending_item_cta: "ช้อปเลย",
        trending_collections: &[
            HomeCollection {
                name: "เลเยอร์รับใบไม้ร่วง",
                description: "สัมผัสผิวสัมผัสอบอุ่นกับโทนสีเอิร์ธโทน",
                image_alt: "นางแบบสวมเสื้อผ้าหลายชั้นสำหรับฤดูใบไม้ร่วง",
            },
            HomeCollection {
                name: "แอกทีฟเอสเซนเชียล",
                description: "ผ้าเทคนิคที่พร้อมเคลื่อนไหวไปกับคุณ",
                image_alt: "ชุดออกกำลังกายจัดวางแบบแฟลตเลย์",
            },
            HomeCollection {
                name: "ลุคสบายยามเช้า",
                description: "นิตแวร์นุ่มสบายสำหรับวันพักผ่อน",
                image_alt: "ชุดลำลองเนื้อผ้านุ่มบนโซฟา",
            },
        ],
        perks: &[
            HomePerk {
                title: "จัดส่งฟรี",
                description: "ส่งฟรีเมื่อสั่งซื้อครบ 2,500 บาท.",
            },
            HomePerk {
                title: "คืนง่าย",
                description: "คืนหรือเปลี่ยนสินค้าได้ภายใน 30 วันพร้อมเครดิตร้านทันที.",
            },
            HomePerk {
                title: "คะแนนสะสมสมาชิก",
                description: "รับคะแนนทุกครั้งที่ช้อปและแลกรับสิทธิพิเศษได้ทุกเมื่อ.",
            },
        ],
        testimonials_heading: "ลูกค้าหลายพันคนไว้วางใจ",
        testimonials_description: "เสียงตอบรับจริงจากผู้ที่เลือกเราเป็นไอเท็มประจำวัน",
        testimonials_cta: "อ่านรีวิวทั้งหมด",
        testimonials: &[
            Testimonial {
                quote: "คุณภาพเทียบเท่าแบรนด์หรูในราคาที่จับต้องได้ เป็นร้านที่ฉันเลือกสำหรับไอเท็มพื้นฐานเสมอ.",
                name: "เจมี่ ลี",
                role: "ลูกค้ายืนยันตัวตน",
            },
            Testimonial {
                quote: "จัดส่งรวดเร็วและสินค้าพอดีตัวตั้งแต่ครั้งแรกที่ลอง",
                name: "มอร์แกน สมิธ",
                role: "สมาชิกประจำ",
            },
        ],
        membership_heading: "เข้าร่วม Collective",
        membership_description: "รับสิทธิ์เข้าถึงสินค้าล่วงหน้า เซสชันสไตลิ่ง และราคาพิเศษสำหรับสมาชิก ช่วยให้คุณอัปเดตแรงบันดาลใจได้ง่ายขึ้น",
        membership_primary_cta: "เริ่มต้น",
        membership_secondary_cta: "ดูสิทธิประโยชน์สมาชิก",
        membership_highlights_title: "ไฮไลต์สำหรับสมาชิก",
        membership_highlights: &[
            "เชิญร่วมคอลเลกชันลิมิเต็ดก่อนใคร",
            "เคล็ดลับการมิกซ์แอนด์แมตช์รายเดือนจากทีมดีไซน์",
            "การดูแลแบบเร่งด่วนและระยะเวลาคืนสินค้าที่นานขึ้น",
        ],
    },
    shop: ShopMessages {
        hero_badge: "คอลเลกชันฤดูใบไม้ร่วง",
        hero_title: "ช้อปไอเท็มที่เคลื่อนไหวไปกับคุณ",
        hero_description: "ค้นหาชิ้นสำคัญที่ปรับแต่งได้ง่าย แอ็กเซสซอรี่ที่พิถีพิถัน และซิลูเอตที่ใส่ได้นาน เลือกกรองตามหมวดหมู่หรือสีเพื่อสร้างแคปซูลของคุณเอง",
        hero_callouts: &["สินค้าใหม่ทุกวันพฤหัสบดี", "เปลี่ยน/คืนได้ฟรีภายใน 30 วัน"],
        hero_card_title: "คัดสรรโดยทีมออกแบบ",
        hero_card_description: "ทุกลุคผลิตด้วยเส้นใยรีไซเคิลและโรงงานที่ตรวจสอบได้",
        category_heading: "เลือกตามหมวดหมู่",
        categories: &[
            CategoryOption {
                filter: CategoryFilter::All,
                label: "ทั้งหมด",
                description: "ชมทุกคอลเลกชันได้ในที่เดียว.",
            },
            CategoryOption {
                filter: CategoryFilter::Only(Category::Outerwear),
                label: "เสื้อคลุม",
                description: "เทรนช์ โค้ต และเสื้อกั๊กสำหรับเลเยอร์.",
            },
            CategoryOption {
                filter: CategoryFilter::Only(Category::Bags),
                label: "กระเป๋า",
                description: "กระเป๋าที่ออกแบบเพื่อการใช้งานทุกวัน.",
            },
            CategoryOption {
                filter: CategoryFilter::Only(Category::Dresses),
                label: "เดรส",
                description: "ซิลูเอตโปร่งสบายที่คงความเรียบหรู.",
            },
            CategoryOption {
                filter: CategoryFilter::Only(Category::Essentials),
                label: "ไอเท็มพื้นฐาน",
                description: "ชิ้นหลักสำหรับมิกซ์แอนด์แมตช์ทุกวัน.",
            },
            CategoryOption {
                filter: CategoryFilter::Only(Category::Travel),
                label: "การเดินทาง",
                description: "กระเป๋าและอุปกรณ์สำหรับทริปน้ำหนักเบา.",
            },
            CategoryOption {
                filter: CategoryFilter::Only(Category::Accessories),
                label: "เครื่องประดับ",
                description: "เติมเต็มลุคด้วยรายละเอียดเลเยอร์ที่พอดี.",
            },
            CategoryOption {
                filter: CategoryFilter::Only(Category::Sweaters),
                label: "สเวตเตอร์",
                description: "นิตแวร์นุ่มสบายสำหรับอากาศเปลี่ยนฤดู.",
            },
        ],
        color_label: "โทนสี",
        color_options: &[
            ColorOption { filter: ColorFilter::All, label: "ทั้งหมด" },
            ColorOption { filter: ColorFilter::Only(Color::Cognac), label: "Cognac" },
            ColorOption { filter: ColorFilter::Only(Color::Black), label: "ดำ" },
            ColorOption { filter: ColorFilter::Only(Color::Fog), label: "เทาหมอก" },
            ColorOption { filter: ColorFilter::Only(Color::Coal), label: "ถ่าน" },
            ColorOption { filter: ColorFilter::Only(Color::Steel), label: "สตีล" },
            ColorOption { filter: ColorFilter::Only(Color::Tan), label: "น้ำตาลอ่อน" },
            ColorOption { filter: ColorFilter::Only(Color::Stone), label: "สโตน" },
            ColorOption { filter: ColorFilter::Only(Color::Olive), label: "เขียวออลีฟ" },
            ColorOption { filter: ColorFilter::Only(Color::Jet), label: "เจ็ท" },
            ColorOption { filter: ColorFilter::Only(Color::Pearl), label: "มุก" },
            ColorOption { filter: ColorFilter::Only(Color::Umber), label: "อัมเบอร์" },
            ColorOption { filter: ColorFilter::Only(Color::Charcoal), label: "ชาร์โคล" },
            ColorOption { filter: ColorFilter::Only(Color::Ivory), label: "ไอวอรี่" },
            ColorOption { filter: ColorFilter::Only(Color::Sable), label: "เซเบิล" },
            ColorOption { filter: ColorFilter::Only(Color::Midnight), label: "มิดไนต์" },
            ColorOption { filter: ColorFilter::Only(Color::Alpine), label: "อัลไพน์" },
            ColorOption { filter: ColorFilter::Only(Color::Sand), label: "ทราย" },
            ColorOption { filter: ColorFilter::Only(Color::Slate), label: "สเลต" },
        ],
        sort_label: "จัดเรียง",
        sort_options: &[
            SortOption { sort: SortKey::Featured, label: "แนะนำ" },
            SortOption { sort: SortKey::PriceLowToHigh, label: "ราคาต่ำไปสูง" },
            SortOption { sort: SortKey::PriceHighToLow, label: "ราคาสูงไปต่ำ" },
            SortOption { sort: SortKey::Newest, label: "สินค้าเข้าใหม่" },
            SortOption { sort: SortKey::TopRated, label: "เรตติ้งสูงสุด" },
        ],
        reset_label: "รีเซ็ต",
        styles_available_label: "สไตล์พร้อมจำหน่าย",
        styles_description: "คัดเฉพาะไอเท็มที่ยังคงรูปทรงและสีสันหลังสวมใส่มากกว่า 50 ครั้ง.",
        empty_state: "ไม่มีสินค้าที่ตรงกับตัวกรองของคุณ รีเซ็ตเพื่อดูคอลเลกชันทั้งหมด",
        new_badge: "ใหม่",
        view_details: "ดูรายละเอียด",
        rating_summary: rating_summary_th,
        reserve_heading: "จองลุคที่คุณชอบ",
        reserve_description: "เข้าร่วม ShopSphere Reserve เพื่อเข้าถึงสินค้าใหม่ก่อนใคร รับส่วนลดพิเศษ และจัดส่งด่วนฟรีทุกออเดอร์.",
        reserve_primary_cta: "สมัครสมาชิก",
        reserve_secondary_cta: "ดูคอลเลกชัน",
        reserve_perks_title: "สิทธิพิเศษสมาชิก",
        reserve_perks: &[
            "เข้าถึงคอลเลกชันรายสัปดาห์ก่อนใคร",
            "ที่ปรึกษาสไตล์ส่วนตัว",
            "ขยายเวลาคืนสินค้าและเครดิตทันที",
        ],
        service_highlights_heading: "บริการพิเศษ",
        service_highlights: &[
            ShopHighlight {
                title: "ปรับแก้ไซซ์ฟรี",
                description: "เข้าร้าน Studio เพื่อปรับแต่งโค้ตและเดรสให้พอดีตัว",
            },
            ShopHighlight {
                title: "จัดส่งรวดเร็วแบบรักษ์โลก",
                description: "ทุกคำสั่งซื้อบรรจุในวัสดุรีไซเคิลพร้อมหมายเลขติดตาม",
            },
            ShopHighlight {
                title: "ปรึกษาสไตล์ 30 นาที",
                description: "จองเซสชันออนไลน์เพื่อใช้ประโยชน์สูงสุดจากแต่ละคอลเลกชัน",
            },
        ],
        stories_heading: "สตอรี่สไตล์",
        stories_description: "อินไซต์จากทีมงานเพื่อให้ตู้เสื้อผ้าหมุนเวียนได้เสมอ",
        stories_cta: "ดูบทความทั้งหมด",
        stories_read_more: "อ่านต่อ",
        editorial_stories: &[
            EditorialStory {
                title: "สร้างแคปซูลสำหรับกระเป๋าถือขึ้นเครื่อง",
                excerpt: "ทีมดีไซน์แชร์ 4 ลุคที่ใช้กระเป๋าใบเดียว",
                href: "/editorial/carry-on-capsule",
            },
            EditorialStory {
                title: "ชูจุดเด่นผ้าแคชเมียร์รีไซเคิล",
                excerpt: "ทำความรู้จักนิตแวร์ใหม่จากโรงทอขนาดเล็กในอิตาลี",
                href: "/editorial/cashmere-blend",
            },
        ],
    },
    cart: CartMessages {
        header_badge: "ตะกร้าของคุณ",
        header_title: "พร้อมชำระเงินหรือยัง?",
        header_description: "ตรวจสอบสินค้า ปรับจำนวน หรือบันทึกรายการที่อยากเก็บไว้ ทุกออเดอร์จัดส่งแบบคาร์บอนนิวทรัลและเปลี่ยนไซซ์ได้ฟรีภายใน 30 วัน.",
        continue_shopping_label: "เลือกซื้อสินค้าต่อ",
        detail_labels: CartDetailLabels {
            color: "สี",
            size: "ไซซ์",
            quantity: "จำนวน",
        },
        status_copy: StatusCopy {
            in_stock: "พร้อมส่ง",
            low_stock: "ใกล้หมด",
            backorder: "สั่งจองล่วงหน้า",
        },
        lead_times: &[
            (ProductId::new(1), "จัดส่งภายใน 3-5 วันทำการ"),
            (ProductId::new(2), "จัดส่งภายใน 2-4 วันทำการ"),
            (ProductId::new(3), "จัดส่งพรุ่งนี้"),
        ],
        move_to_saved: "ย้ายไปบันทึกไว้",
        remove_item: "ลบออก",
        fulfillment_heading: "สิทธิพิเศษการจัดส่ง",
        fulfillment_highlights: &[
            CartHighlight {
                title: "จัดส่งคาร์บอนนิวทรัล",
                description: "ทุกคำสั่งซื้อชดเชยคาร์บอนและใช้บรรจุภัณฑ์รีไซเคิล",
            },
            CartHighlight {
                title: "รับสินค้าวันเดียว",
                description: "สั่งก่อน 14:00 น. และรับที่สาขา Studio ได้ภายใน 3 ชั่วโมง",
            },
            CartHighlight {
                title: "รับประกันไซซ์ 30 วัน",
                description: "ลองที่บ้านและเปลี่ยนไซซ์ได้ฟรีภายในสามสิบวัน",
            },
        ],
        order_summary_heading: "สรุปคำสั่งซื้อ",
        order_summary: OrderSummaryLabels {
            subtotal: "ยอดรวมสินค้า",
            shipping: "ค่าจัดส่ง",
            estimated_tax: "ภาษีประมาณการ",
            savings: "ส่วนลดสมาชิก",
            total: "ยอดชำระ",
            checkout_cta: "ดำเนินการชำระเงิน",
            checkout_note: "สามารถเลือกวิธีจัดส่งและใส่โค้ดส่วนลดเพิ่มได้ในขั้นตอนชำระเงิน",
        },
        reserve_heading: "รับจัดส่งด่วนฟรี 2 วัน",
        reserve_description: "ชำระเงินด้วย ShopSphere Reserve เพื่อรับการจัดส่งแบบด่วนอัตโนมัติและการดูแลลำดับพิเศษสำหรับออเดอร์ถัดไป",
        reserve_cta: "ดูรายละเอียด",
        recommendations_heading: "อาจถูกใจคุณ",
        recommendations_description: "เติมเต็มลุคด้วยไอเท็มที่สไตลิสต์คัดมาให้",
        recommendations_collections_cta: "ดูคอลเลกชันทั้งหมด",
        recommendations_cta: "เพิ่มลงตะกร้า",
        recommendations: &[
            Recommendation {
                name: "กระเป๋าใส่การ์ด",
                price: 68,
                image_alt: "กระเป๋าใส่การ์ดหนังวางบนพื้นหินอ่อน",
            },
            Recommendation {
                name: "เข็มขัด Heritage",
                price: 54,
                image_alt: "เข็มขัดหนังสีน้ำตาลกับหัวเข็มขัดสีเงิน",
            },
            Recommendation {
                name: "กระเป๋าอเนกประสงค์",
                price: 42,
                image_alt: "กระเป๋าเครื่องสำอางผ้าแคนวาส",
            },
        ],
    },
    auth: AuthMessages {
        login_title: "เข้าสู่ระบบ",
        login_subtitle: "เข้าสู่ระบบเพื่อตรวจสอบคำสั่งซื้อและจัดการบัญชีของคุณ",
        signup_title: "สร้างบัญชีของคุณ",
        signup_subtitle: "ร่วมเป็นสมาชิก ShopSphere เพื่อติดตามคำสั่งซื้อและรับราคาพิเศษสำหรับสมาชิก",
        first_name_label: "ชื่อ",
        last_name_label: "นามสกุล",
        email_label: "อีเมล",
        email_placeholder: "you@example.com",
        password_label: "รหัสผ่าน",
        password_placeholder: "กรอกรหัสผ่านของคุณ",
        confirm_password_label: "ยืนยันรหัสผ่าน",
        remember_label: "จดจำฉันไว้",
        forgot_password: "ลืมรหัสผ่าน?",
        marketing_label: "รับเคล็ดลับสไตล์และสิทธิ์เข้าถึงสินค้าใหม่ก่อนใคร",
        login_cta: "เข้าสู่ระบบ",
        signup_cta: "สร้างบัญชี",
        login_footer_prompt: "ยังไม่เป็นสมาชิก ShopSphere?",
        login_footer_cta: "สร้างบัญชี",
        signup_footer_prompt: "มีบัญชีอยู่แล้ว?",
        signup_footer_cta: "เข้าสู่ระบบ",
        error_missing_fields: "กรอกอีเมลและรหัสผ่านเพื่อดำเนินการต่อ",
        error_missing_name: "กรอกชื่อและนามสกุลของคุณ",
        error_invalid_email: "กรอกอีเมลที่ถูกต้อง",
        error_password_short: "รหัสผ่านต้องมีอย่างน้อย 8 ตัวอักษร",
        error_password_mismatch: "รหัสผ่านไม่ตรงกัน",
        error_generic: "เกิดข้อผิดพลาด โปรดลองอีกครั้ง",
    },
};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const BUNDLES: [&Messages; 2] = [&EN_US, &TH_TH];

    #[test]
    fn test_category_labels_cover_every_category() {
        let categories = [
            Category::Outerwear,
            Category::Bags,
            Category::Dresses,
            Category::Essentials,
            Category::Travel,
            Category::Accessories,
            Category::Sweaters,
        ];
        for messages in BUNDLES {
            for category in categories {
                let label = messages.shop.category_label(category);
                assert!(!label.is_empty());
                // The table itself has an entry; the raw id is only a fallback.
                assert!(
                    messages
                        .shop
                        .categories
                        .iter()
                        .any(|o| o.filter == CategoryFilter::Only(category)),
                    "missing category entry for {category}"
                );
            }
        }
    }

    #[test]
    fn test_color_labels_cover_every_color() {
        for messages in BUNDLES {
            for color in Color::ALL {
                assert!(
                    messages
                        .shop
                        .color_options
                        .iter()
                        .any(|o| o.filter == ColorFilter::Only(color)),
                    "missing color entry for {color}"
                );
            }
        }
    }

    #[test]
    fn test_sort_options_cover_every_sort_key() {
        let keys = [
            SortKey::Featured,
            SortKey::PriceLowToHigh,
            SortKey::PriceHighToLow,
            SortKey::Newest,
            SortKey::TopRated,
        ];
        for messages in BUNDLES {
            for key in keys {
                assert!(
                    messages.shop.sort_options.iter().any(|o| o.sort == key),
                    "missing sort entry for {key:?}"
                );
            }
        }
        assert_eq!(
            EN_US.shop.sort_label_for(SortKey::PriceLowToHigh),
            "Price: Low to High"
        );
        assert_eq!(TH_TH.shop.sort_label_for(SortKey::TopRated), "เรตติ้งสูงสุด");
    }

    #[test]
    fn test_localized_labels() {
        assert_eq!(EN_US.shop.category_label(Category::Bags), "Bags");
        assert_eq!(TH_TH.shop.category_label(Category::Bags), "กระเป๋า");
        assert_eq!(EN_US.shop.color_label(Color::Black), "Black");
        assert_eq!(TH_TH.shop.color_label(Color::Black), "ดำ");
    }

    #[test]
    fn test_label_lookup_falls_back_to_raw_value() {
        let mut shop = EN_US.shop;
        shop.categories = &[];
        shop.color_options = &[];
        assert_eq!(shop.category_label(Category::Bags), "bags");
        assert_eq!(shop.color_label(Color::Olive), "Olive");
    }

    #[test]
    fn test_lead_time_lookup() {
        assert_eq!(
            EN_US.cart.lead_time(ProductId::new(3)),
            Some("Ships tomorrow")
        );
        assert!(EN_US.cart.lead_time(ProductId::new(9)).is_none());
        assert!(TH_TH.cart.lead_time(ProductId::new(1)).is_some());
    }

    #[test]
    fn test_status_copy_is_exhaustive() {
        for messages in BUNDLES {
            for status in [
                StockStatus::InStock,
                StockStatus::LowStock,
                StockStatus::Backorder,
            ] {
                assert!(!messages.cart.status_copy.label(status).is_empty());
            }
        }
    }

    #[test]
    fn test_rating_summary_formats() {
        let rating = Decimal::new(48, 1);
        assert_eq!(
            (EN_US.shop.rating_summary)(rating, 164),
            "4.8 rating | 164 reviews"
        );
        let thai = (TH_TH.shop.rating_summary)(rating, 164);
        assert!(thai.contains("คะแนน 4.8"));
        assert!(thai.contains("164 รีวิว"));
        // The source locale shipped placeholder glyphs here; real copy only.
        assert!(!thai.contains('?'));
    }

    #[test]
    fn test_rating_summary_fixed_one_decimal() {
        let summary = (EN_US.shop.rating_summary)(Decimal::from(4), 10);
        assert!(summary.starts_with("4.0"));
    }

    #[test]
    fn test_auth_error_codes_map_to_copy() {
        for messages in BUNDLES {
            let auth = &messages.auth;
            assert_eq!(
                auth.error_message("missing_fields"),
                auth.error_missing_fields
            );
            assert_eq!(
                auth.error_message("password_mismatch"),
                auth.error_password_mismatch
            );
            assert_eq!(auth.error_message("totally-unknown"), auth.error_generic);
        }
    }
}
